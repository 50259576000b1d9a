//! Style sheet resolution for the CSS engine.
//!
//! This crate ties the CSS modules together behind one context object, the
//! [`StyleSheetFactory`]:
//! - loading sheets by path through a cache, or from inline content without one
//! - combining loaded sheets into a destination sheet in cascade order
//! - resolving structural pseudo-classes through the selector registry
//!
//! Transform values are re-exported from `css_transforms` so callers styling an element
//! need only this crate.

mod config;
mod factory;
mod source;

pub use config::FactoryConfig;
pub use factory::StyleSheetFactory;
pub use source::{FileSystemSource, StyleSource, decode};

pub use css_cascade::{Declaration, Origin, Rule, StyleSheet};
pub use css_selectors::{SiblingPosition, StructuralMatcherKind, StructuralSelector};
pub use css_transforms::{
    ElementGeometry, Length, Mat4, Property, PropertyUnit, PropertyValue, StyleSpecification,
    Transform, TransformPrimitive, parse_transform,
};
