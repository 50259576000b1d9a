//! Structural pseudo-class kinds and their matching rules.
//! Selectors 3 §6.6.5: Structural pseudo-classes

use crate::nth::AnB;

/// The closed set of structural pseudo-classes understood by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StructuralMatcherKind {
    NthChild,
    NthLastChild,
    NthOfType,
    NthLastOfType,
    FirstChild,
    LastChild,
    FirstOfType,
    LastOfType,
    OnlyChild,
    OnlyOfType,
    Empty,
}

impl StructuralMatcherKind {
    /// Every kind, in registration order.
    pub const ALL: [Self; 11] = [
        Self::NthChild,
        Self::NthLastChild,
        Self::NthOfType,
        Self::NthLastOfType,
        Self::FirstChild,
        Self::LastChild,
        Self::FirstOfType,
        Self::LastOfType,
        Self::OnlyChild,
        Self::OnlyOfType,
        Self::Empty,
    ];

    /// The pseudo-class name without the leading colon.
    pub const fn name(self) -> &'static str {
        match self {
            Self::NthChild => "nth-child",
            Self::NthLastChild => "nth-last-child",
            Self::NthOfType => "nth-of-type",
            Self::NthLastOfType => "nth-last-of-type",
            Self::FirstChild => "first-child",
            Self::LastChild => "last-child",
            Self::FirstOfType => "first-of-type",
            Self::LastOfType => "last-of-type",
            Self::OnlyChild => "only-child",
            Self::OnlyOfType => "only-of-type",
            Self::Empty => "empty",
        }
    }

    /// The kind named `name` (without the leading colon), if any.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Test an element's position against this kind.
    ///
    /// `nth` is only consulted by the `nth-*` kinds; the others are fixed tests.
    pub fn matches(self, nth: AnB, position: &SiblingPosition) -> bool {
        match self {
            Self::NthChild => nth.matches(position.index),
            Self::NthLastChild => nth.matches(from_end(position.index, position.count)),
            Self::NthOfType => nth.matches(position.type_index),
            Self::NthLastOfType => {
                nth.matches(from_end(position.type_index, position.type_count))
            }
            Self::FirstChild => position.index == 1,
            Self::LastChild => position.index == position.count,
            Self::FirstOfType => position.type_index == 1,
            Self::LastOfType => position.type_index == position.type_count,
            Self::OnlyChild => position.count == 1,
            Self::OnlyOfType => position.type_count == 1,
            Self::Empty => !position.has_children,
        }
    }
}

/// 1-based index counted from the last sibling.
const fn from_end(index: usize, count: usize) -> usize {
    count.saturating_sub(index).saturating_add(1)
}

/// Where an element sits among its siblings.
///
/// Indices are 1-based and count element siblings only; the `type_*` figures count
/// only siblings sharing the element's tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SiblingPosition {
    pub index: usize,
    pub count: usize,
    pub type_index: usize,
    pub type_count: usize,
    /// Whether the element has any element or text children.
    pub has_children: bool,
}

/// A resolved structural pseudo-class: matcher kind plus its `An+B` coefficients.
///
/// A descriptor without a kind is the "none" selector. It carries `a = 0, b = 0`
/// and never matches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StructuralSelector {
    pub kind: Option<StructuralMatcherKind>,
    pub step: i32,
    pub offset: i32,
}

impl StructuralSelector {
    /// The descriptor for unknown pseudo-class names.
    pub const NONE: Self = Self {
        kind: None,
        step: 0,
        offset: 0,
    };

    #[inline]
    pub const fn new(kind: StructuralMatcherKind, nth: AnB) -> Self {
        Self {
            kind: Some(kind),
            step: nth.step,
            offset: nth.offset,
        }
    }

    #[inline]
    pub const fn is_none(&self) -> bool {
        self.kind.is_none()
    }

    #[inline]
    pub const fn nth(&self) -> AnB {
        AnB::new(self.step, self.offset)
    }

    /// Test an element's position; the "none" descriptor matches nothing.
    pub fn matches(&self, position: &SiblingPosition) -> bool {
        self.kind
            .is_some_and(|kind| kind.matches(self.nth(), position))
    }
}
