//! Selectors Level 3: Structural pseudo-classes.
//! Reference: <https://www.w3.org/TR/selectors-3/#structural-pseudos>
//!
//! This module implements the structural half of selector resolution:
//! - `An+B` argument parsing for the `nth-*` pseudo-classes
//! - The closed set of structural matcher kinds and their sibling-position tests
//! - A name registry that binds a pseudo-class such as `nth-child(2n+1)` to a descriptor
//!
//! Matching against a document tree is left to the caller, which supplies a
//! [`SiblingPosition`] for the element under test.

mod nth;
mod registry;
mod structural;

// Re-export public API
pub use nth::{AnB, parse_nth};
pub use registry::SelectorRegistry;
pub use structural::{SiblingPosition, StructuralMatcherKind, StructuralSelector};
