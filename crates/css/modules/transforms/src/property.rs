//! Property metadata and the property value wrapper for transforms.

extern crate alloc;

use crate::transform::Transform;
use alloc::sync::Arc;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Properties handled by the transforms module.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyId {
    Transform,
    TransformOrigin,
    Perspective,
    PerspectiveOrigin,
}

/// Static metadata describing a property.
/// CSS Transforms §7: Property definitions (css-transforms-1, css-transforms-2)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub id: PropertyId,
    pub name: &'static str,
    pub inherited: bool,
    pub initial_value: &'static str,
}

/// Lookup of property metadata by id.
pub trait PropertyDefinitions {
    fn lookup_property_definition(&self, id: PropertyId) -> Option<&'static PropertyDefinition>;
}

/// The built-in property table.
static DEFINITIONS: Lazy<HashMap<PropertyId, PropertyDefinition>> = Lazy::new(|| {
    [
        (PropertyId::Transform, "transform", "none"),
        (PropertyId::TransformOrigin, "transform-origin", "50% 50% 0"),
        (PropertyId::Perspective, "perspective", "none"),
        (PropertyId::PerspectiveOrigin, "perspective-origin", "50% 50%"),
    ]
    .into_iter()
    .map(|(id, name, initial_value)| {
        let definition = PropertyDefinition {
            id,
            name,
            inherited: false,
            initial_value,
        };
        (id, definition)
    })
    .collect()
});

/// Property metadata backed by the built-in table.
#[derive(Clone, Copy, Debug, Default)]
pub struct StyleSpecification;

impl PropertyDefinitions for StyleSpecification {
    #[inline]
    fn lookup_property_definition(&self, id: PropertyId) -> Option<&'static PropertyDefinition> {
        DEFINITIONS.get(&id)
    }
}

/// A typed property value. The variant is the value's kind tag.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    Transform(Arc<Transform>),
}

/// Discriminator for the kind of value a [`Property`] holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PropertyUnit {
    Transform,
}

/// A property value together with the definition of the property it belongs to.
#[derive(Clone, Debug, PartialEq)]
pub struct Property {
    pub value: PropertyValue,
    pub unit: PropertyUnit,
    pub definition: Option<&'static PropertyDefinition>,
}

impl Property {
    /// The transform held by this property, if it is transform-typed.
    #[inline]
    pub fn transform(&self) -> Option<&Arc<Transform>> {
        match &self.value {
            PropertyValue::Transform(transform) => Some(transform),
        }
    }
}
