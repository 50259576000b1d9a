//! Resolution of transform functions into matrices.
//! CSS Transforms §6: The Transform Rendering Model

use crate::primitive::{Length, TransformPrimitive};
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Read-only geometry of the element a transform applies to.
pub trait ElementGeometry {
    /// The element's current border-box size, or `None` before layout has produced one.
    fn box_size(&self) -> Option<Vec2>;
}

impl ElementGeometry for Vec2 {
    #[inline]
    fn box_size(&self) -> Option<Vec2> {
        Some(*self)
    }
}

impl ElementGeometry for Option<Vec2> {
    #[inline]
    fn box_size(&self) -> Option<Vec2> {
        *self
    }
}

/// Compose `primitives` in order into a single matrix for `element`.
///
/// The box is read on every call, so a resize is reflected the next time the matrix is
/// requested. Percentages on an element without a box resolve to 0px. An empty list is
/// the identity and never queries the element.
pub fn resolve_transform<G>(primitives: &[TransformPrimitive], element: &G) -> Mat4
where
    G: ElementGeometry + ?Sized,
{
    if primitives.is_empty() {
        return Mat4::IDENTITY;
    }
    let size = element.box_size().unwrap_or(Vec2::ZERO);
    primitives
        .iter()
        .fold(Mat4::IDENTITY, |matrix, primitive| {
            matrix * primitive_matrix(primitive, size)
        })
}

/// Resolve one primitive against `element`'s current box.
pub fn resolve_primitive<G>(primitive: &TransformPrimitive, element: &G) -> Mat4
where
    G: ElementGeometry + ?Sized,
{
    primitive_matrix(primitive, element.box_size().unwrap_or(Vec2::ZERO))
}

/// Matrix of one primitive for a box of `size`.
/// CSS Transforms §13: Mathematical Description of the Transform Functions
fn primitive_matrix(primitive: &TransformPrimitive, size: Vec2) -> Mat4 {
    match *primitive {
        TransformPrimitive::Matrix2D([a_val, b_val, c_val, d_val, e_val, f_val]) => {
            Mat4::from_cols(
                Vec4::new(a_val, b_val, 0.0, 0.0),
                Vec4::new(c_val, d_val, 0.0, 0.0),
                Vec4::Z,
                Vec4::new(e_val, f_val, 0.0, 1.0),
            )
        }
        TransformPrimitive::Matrix3D(values) => Mat4::from_cols_array(&values),
        TransformPrimitive::TranslateX(x) => translation(x, Length::default(), 0.0, size),
        TransformPrimitive::TranslateY(y) => translation(Length::default(), y, 0.0, size),
        TransformPrimitive::TranslateZ(z) => {
            translation(Length::default(), Length::default(), depth(z), size)
        }
        TransformPrimitive::Translate2D(x, y) => translation(x, y, 0.0, size),
        TransformPrimitive::Translate3D(x, y, z) => translation(x, y, depth(z), size),
        TransformPrimitive::ScaleX(x) => Mat4::from_scale(Vec3::new(x, 1.0, 1.0)),
        TransformPrimitive::ScaleY(y) => Mat4::from_scale(Vec3::new(1.0, y, 1.0)),
        TransformPrimitive::ScaleZ(z) => Mat4::from_scale(Vec3::new(1.0, 1.0, z)),
        TransformPrimitive::Scale2D(x, y) => Mat4::from_scale(Vec3::new(x, y, 1.0)),
        TransformPrimitive::Scale3D(x, y, z) => Mat4::from_scale(Vec3::new(x, y, z)),
        TransformPrimitive::RotateX(angle) => Mat4::from_rotation_x(angle),
        TransformPrimitive::RotateY(angle) => Mat4::from_rotation_y(angle),
        TransformPrimitive::RotateZ(angle) | TransformPrimitive::Rotate2D(angle) => {
            Mat4::from_rotation_z(angle)
        }
        TransformPrimitive::Rotate3D(axis, angle) => {
            let axis = axis.normalize_or_zero();
            if axis == Vec3::ZERO {
                Mat4::IDENTITY
            } else {
                Mat4::from_axis_angle(axis, angle)
            }
        }
        TransformPrimitive::SkewX(x) => skew(x, 0.0),
        TransformPrimitive::SkewY(y) => skew(0.0, y),
        TransformPrimitive::Skew2D(x, y) => skew(x, y),
        TransformPrimitive::Perspective(distance) => {
            // Distances below 1px are clamped to 1px.
            let distance = distance.max(1.0);
            Mat4::from_cols(Vec4::X, Vec4::Y, Vec4::new(0.0, 0.0, 1.0, -1.0 / distance), Vec4::W)
        }
    }
}

fn translation(x: Length, y: Length, z: f32, size: Vec2) -> Mat4 {
    Mat4::from_translation(Vec3::new(x.resolve(size.x), y.resolve(size.y), z))
}

/// Boxes have no depth, so Z percentages resolve to 0.
fn depth(z: Length) -> f32 {
    z.resolve(0.0)
}

fn skew(x: f32, y: f32) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(1.0, y.tan(), 0.0, 0.0),
        Vec4::new(x.tan(), 1.0, 0.0, 0.0),
        Vec4::Z,
        Vec4::W,
    )
}
