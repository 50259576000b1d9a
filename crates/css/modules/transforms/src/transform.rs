//! The computed value of the `transform` property.

extern crate alloc;

use crate::primitive::TransformPrimitive;
use crate::property::{Property, PropertyDefinitions, PropertyId, PropertyUnit, PropertyValue};
use crate::resolve::{ElementGeometry, resolve_transform};
use alloc::sync::Arc;
use glam::Mat4;

/// An ordered list of transform functions. An empty list is the identity transform.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transform {
    primitives: Vec<TransformPrimitive>,
}

impl Transform {
    #[inline]
    pub fn new(primitives: Vec<TransformPrimitive>) -> Self {
        Self { primitives }
    }

    /// Wrap `primitives` as a `transform` property value carrying its definition.
    pub fn make_property<D>(primitives: Vec<TransformPrimitive>, definitions: &D) -> Property
    where
        D: PropertyDefinitions + ?Sized,
    {
        Property {
            value: PropertyValue::Transform(Arc::new(Self::new(primitives))),
            unit: PropertyUnit::Transform,
            definition: definitions.lookup_property_definition(PropertyId::Transform),
        }
    }

    #[inline]
    pub fn add_primitive(&mut self, primitive: TransformPrimitive) {
        self.primitives.push(primitive);
    }

    #[inline]
    pub fn clear_primitives(&mut self) {
        self.primitives.clear();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }

    #[inline]
    pub fn primitives(&self) -> &[TransformPrimitive] {
        &self.primitives
    }

    /// The composed matrix for `element`, recomputed from its current box.
    #[inline]
    pub fn matrix<G>(&self, element: &G) -> Mat4
    where
        G: ElementGeometry + ?Sized,
    {
        resolve_transform(&self.primitives, element)
    }
}
