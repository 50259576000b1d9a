#![cfg(test)]

use core::f32::consts::FRAC_PI_2;
use css_transforms::{
    Length, Mat4, PropertyId, PropertyUnit, StyleSpecification, Transform, TransformPrimitive,
    Vec2, Vec3, Vec4, resolve_primitive, resolve_transform,
};

const EPSILON: f32 = 1e-5;

/// Where the matrix sends the point `(x, y, 0)`.
fn apply(matrix: Mat4, x: f32, y: f32) -> Vec3 {
    (matrix * Vec4::new(x, y, 0.0, 1.0)).truncate()
}

fn assert_point(actual: Vec3, expected: Vec3) {
    assert!(
        actual.abs_diff_eq(expected, EPSILON),
        "expected {expected:?}, got {actual:?}"
    );
}

#[test]
fn empty_list_is_identity() {
    assert_eq!(resolve_transform(&[], &None::<Vec2>), Mat4::IDENTITY);
    assert_eq!(resolve_transform(&[], &Vec2::new(30.0, 40.0)), Mat4::IDENTITY);
    assert_eq!(Transform::default().matrix(&Vec2::ONE), Mat4::IDENTITY);
}

#[test]
fn composition_order_matters() {
    let element = Vec2::new(100.0, 100.0);
    let scale_then_translate = [
        TransformPrimitive::Scale2D(2.0, 2.0),
        TransformPrimitive::Translate2D(Length::Px(10.0), Length::Px(0.0)),
    ];
    let translate_then_scale = [scale_then_translate[1], scale_then_translate[0]];

    let forward = resolve_transform(&scale_then_translate, &element);
    let reversed = resolve_transform(&translate_then_scale, &element);

    assert_point(apply(forward, 0.0, 0.0), Vec3::new(20.0, 0.0, 0.0));
    assert_point(apply(reversed, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0));
    assert!(!forward.abs_diff_eq(reversed, EPSILON));
}

#[test]
fn composition_is_post_multiplication() {
    let element = Vec2::new(50.0, 50.0);
    let primitives = [
        TransformPrimitive::Rotate2D(FRAC_PI_2),
        TransformPrimitive::TranslateX(Length::Px(5.0)),
        TransformPrimitive::ScaleY(3.0),
    ];
    let expected = primitives
        .iter()
        .fold(Mat4::IDENTITY, |acc, primitive| {
            acc * resolve_primitive(primitive, &element)
        });
    assert!(resolve_transform(&primitives, &element).abs_diff_eq(expected, EPSILON));
}

#[test]
fn percentages_follow_the_current_box() {
    let mut transform = Transform::default();
    transform.add_primitive(TransformPrimitive::Translate2D(
        Length::Percent(50.0),
        Length::Percent(25.0),
    ));

    let small = transform.matrix(&Vec2::new(200.0, 100.0));
    assert_point(apply(small, 0.0, 0.0), Vec3::new(100.0, 25.0, 0.0));

    let resized = transform.matrix(&Vec2::new(400.0, 40.0));
    assert_point(apply(resized, 0.0, 0.0), Vec3::new(200.0, 10.0, 0.0));
}

#[test]
fn percentages_without_a_box_resolve_to_zero() {
    let primitives = [
        TransformPrimitive::TranslateX(Length::Percent(50.0)),
        TransformPrimitive::TranslateY(Length::Px(7.0)),
    ];
    let matrix = resolve_transform(&primitives, &None::<Vec2>);
    assert_point(apply(matrix, 0.0, 0.0), Vec3::new(0.0, 7.0, 0.0));
    assert!(primitives[0].is_box_relative());
    assert!(!primitives[1].is_box_relative());
}

#[test]
fn primitive_matrices_match_reference_values() {
    let element = Vec2::ZERO;

    let rotate = resolve_primitive(&TransformPrimitive::Rotate2D(FRAC_PI_2), &element);
    assert_point(apply(rotate, 1.0, 0.0), Vec3::new(0.0, 1.0, 0.0));

    let matrix = TransformPrimitive::Matrix2D([1.0, 0.0, 0.0, 1.0, 5.0, 6.0]);
    assert_point(
        apply(resolve_primitive(&matrix, &element), 1.0, 1.0),
        Vec3::new(6.0, 7.0, 0.0),
    );

    let skew = resolve_primitive(&TransformPrimitive::SkewX(FRAC_PI_2 / 2.0), &element);
    assert_point(apply(skew, 0.0, 2.0), Vec3::new(2.0, 2.0, 0.0));

    let degenerate = TransformPrimitive::Rotate3D(Vec3::ZERO, 1.0);
    assert_eq!(resolve_primitive(&degenerate, &element), Mat4::IDENTITY);

    let perspective = resolve_primitive(&TransformPrimitive::Perspective(0.0), &element);
    assert!((perspective.z_axis.w + 1.0).abs() < EPSILON);
    let far = resolve_primitive(&TransformPrimitive::Perspective(200.0), &element);
    assert!((far.z_axis.w + 0.005).abs() < EPSILON);
}

#[test]
fn transform_list_mutators() {
    let mut transform = Transform::new(vec![TransformPrimitive::ScaleX(2.0)]);
    assert!(!transform.is_empty());
    transform.add_primitive(TransformPrimitive::RotateZ(1.0));
    assert_eq!(transform.primitives().len(), 2);
    assert_eq!(transform.primitives()[1], TransformPrimitive::RotateZ(1.0));
    transform.clear_primitives();
    assert!(transform.is_empty());
    assert_eq!(transform.matrix(&Vec2::ONE), Mat4::IDENTITY);
}

#[test]
fn make_property_attaches_the_transform_definition() {
    let primitives = vec![
        TransformPrimitive::Scale2D(2.0, 2.0),
        TransformPrimitive::TranslateX(Length::Px(10.0)),
    ];
    let property = Transform::make_property(primitives.clone(), &StyleSpecification);

    let definition = property.definition.map(|definition| (definition.id, definition.name));
    assert_eq!(definition, Some((PropertyId::Transform, "transform")));
    assert_eq!(property.unit, PropertyUnit::Transform);
    let held = property.transform().map(|transform| transform.primitives().to_vec());
    assert_eq!(held, Some(primitives));
}
