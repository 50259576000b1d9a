//! Transform functions.
//! CSS Transforms §13: The Transform Functions (css-transforms-1)

use glam::Vec3;

/// A length argument of a transform function.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Absolute length in CSS pixels.
    Px(f32),
    /// Percentage of the element's box along the function's axis (`50.0` is 50%).
    Percent(f32),
}

impl Default for Length {
    #[inline]
    fn default() -> Self {
        Self::Px(0.0)
    }
}

impl Length {
    /// Resolve against the reference size of the axis this length applies to.
    #[inline]
    pub fn resolve(self, reference: f32) -> f32 {
        match self {
            Self::Px(px) => px,
            Self::Percent(percent) => percent / 100.0 * reference,
        }
    }
}

/// One transform function. Angles are in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransformPrimitive {
    /// `matrix(a, b, c, d, e, f)`
    Matrix2D([f32; 6]),
    /// `matrix3d(...)`, column-major.
    Matrix3D([f32; 16]),
    TranslateX(Length),
    TranslateY(Length),
    TranslateZ(Length),
    Translate2D(Length, Length),
    Translate3D(Length, Length, Length),
    ScaleX(f32),
    ScaleY(f32),
    ScaleZ(f32),
    Scale2D(f32, f32),
    Scale3D(f32, f32, f32),
    RotateX(f32),
    RotateY(f32),
    RotateZ(f32),
    /// `rotate(angle)`: rotation in the plane, identical to `rotateZ`.
    Rotate2D(f32),
    /// `rotate3d(x, y, z, angle)`: rotation about an arbitrary axis.
    Rotate3D(Vec3, f32),
    SkewX(f32),
    SkewY(f32),
    Skew2D(f32, f32),
    /// `perspective(d)` with `d` in pixels.
    Perspective(f32),
}

impl TransformPrimitive {
    /// Whether resolving this primitive reads the element's box.
    pub fn is_box_relative(&self) -> bool {
        let relative = |length: &Length| matches!(length, Length::Percent(_));
        match self {
            Self::TranslateX(x) | Self::TranslateY(x) => relative(x),
            Self::Translate2D(x, y) | Self::Translate3D(x, y, _) => relative(x) || relative(y),
            _ => false,
        }
    }
}
