#![cfg(test)]

use core::f32::consts::{FRAC_PI_2, PI};
use css_transforms::{Length, TransformPrimitive, Vec2, Vec4, parse_transform, resolve_transform};

#[test]
fn parses_function_lists_in_order() {
    let parsed = parse_transform("translate(10px, 50%) scale(2) skewY(0)");
    assert_eq!(
        parsed,
        Some(vec![
            TransformPrimitive::Translate2D(Length::Px(10.0), Length::Percent(50.0)),
            TransformPrimitive::Scale2D(2.0, 2.0),
            TransformPrimitive::SkewY(0.0),
        ])
    );
}

#[test]
fn parses_angle_units() {
    let parsed = parse_transform("rotate(90deg) rotateX(0.5turn) ROTATEZ(200grad)");
    let angles = match parsed.as_deref() {
        Some(
            &[
                TransformPrimitive::Rotate2D(quarter),
                TransformPrimitive::RotateX(half),
                TransformPrimitive::RotateZ(grad),
            ],
        ) => Some((quarter, half, grad)),
        _ => None,
    };
    assert!(angles.is_some(), "unexpected parse result {parsed:?}");
    let (quarter, half, grad) = angles.unwrap_or((f32::NAN, f32::NAN, f32::NAN));
    assert!((quarter - FRAC_PI_2).abs() < 1e-5);
    assert!((half - PI).abs() < 1e-5);
    assert!((grad - PI).abs() < 1e-5);
}

#[test]
fn none_is_the_empty_list() {
    assert_eq!(parse_transform("none"), Some(Vec::new()));
    assert_eq!(parse_transform("  none "), Some(Vec::new()));
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(parse_transform(""), None);
    assert_eq!(parse_transform("translate(10em)"), None);
    assert_eq!(parse_transform("rotate(90)"), None);
    assert_eq!(parse_transform("wobble(1)"), None);
    assert_eq!(parse_transform("matrix(1, 0, 0, 1, 0)"), None);
    assert_eq!(parse_transform("perspective(50%)"), None);
    assert_eq!(parse_transform("none scale(2)"), None);
}

#[test]
fn parsed_scale_then_translate_moves_origin_twice_as_far() {
    let primitives = parse_transform("scale(2) translate(10px)").unwrap_or_default();
    let moved = resolve_transform(&primitives, &Vec2::new(10.0, 10.0)) * Vec4::W;
    assert!((moved.x - 20.0).abs() < 1e-5, "got {moved:?}");
    assert!(moved.y.abs() < 1e-5);
}
