//! CSS Transforms Level 1 and 2: Transform functions and matrix composition.
//! Reference: <https://www.w3.org/TR/css-transforms-1/>
//! Reference: <https://www.w3.org/TR/css-transforms-2/>
//!
//! A `transform` value is an ordered list of [`TransformPrimitive`]s. Each primitive
//! resolves to a 4x4 matrix against the element's current box, and the list composes
//! left to right by post-multiplication:
//!
//! ```text
//! M = I * P0 * P1 * ... * Pn
//! ```
//!
//! Matrices use glam's column-major, column-vector convention, so `Pn` is the first
//! transform applied to a point and `P0` the last. `scale(2) translate(10px)` moves the
//! origin to x = 20.

#![forbid(unsafe_code)]

mod parser;
mod primitive;
mod property;
mod resolve;
mod transform;

pub use glam::{Mat4, Vec2, Vec3, Vec4};
pub use parser::parse_transform;
pub use primitive::{Length, TransformPrimitive};
pub use property::{
    Property, PropertyDefinition, PropertyDefinitions, PropertyId, PropertyUnit, PropertyValue,
    StyleSpecification,
};
pub use resolve::{ElementGeometry, resolve_primitive, resolve_transform};
pub use transform::Transform;
