//! Name lookup for structural pseudo-classes.

use crate::nth::{AnB, parse_nth};
use crate::structural::{StructuralMatcherKind, StructuralSelector};
use log::trace;
use std::collections::HashMap;

/// Fixed table from pseudo-class name to matcher kind.
///
/// The table is filled once on construction and only read afterwards, so a shared
/// reference can be used from any number of threads.
#[derive(Clone, Debug)]
pub struct SelectorRegistry {
    /// Name (without colon) to kind.
    kinds: HashMap<&'static str, StructuralMatcherKind>,
}

impl Default for SelectorRegistry {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl SelectorRegistry {
    pub fn new() -> Self {
        let kinds = StructuralMatcherKind::ALL
            .iter()
            .map(|&kind| (kind.name(), kind))
            .collect();
        Self { kinds }
    }

    /// Look up a bare pseudo-class name.
    #[inline]
    pub fn kind(&self, name: &str) -> Option<StructuralMatcherKind> {
        self.kinds.get(name).copied()
    }

    /// Number of registered pseudo-classes.
    #[inline]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Resolve a pseudo-class such as `nth-child(2n+1)` or `first-child`.
    ///
    /// Unknown names give [`StructuralSelector::NONE`]. Without an argument, or when
    /// the closing parenthesis is missing, the coefficients default to `n` (1, 0).
    pub fn resolve(&self, name: &str) -> StructuralSelector {
        let (key, parameters) = match name.split_once('(') {
            Some((key, rest)) => (key, rest.split_once(')').map(|(inner, _)| inner)),
            None => (name, None),
        };
        let Some(kind) = self.kind(key) else {
            trace!("unknown structural pseudo-class `{name}`");
            return StructuralSelector::NONE;
        };
        let nth = parameters.map_or_else(AnB::default, parse_nth);
        StructuralSelector::new(kind, nth)
    }
}
