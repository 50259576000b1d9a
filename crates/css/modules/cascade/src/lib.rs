//! CSS Cascading and Inheritance Level 4: Style sheet rule sets and cascade order.
//! Reference: <https://www.w3.org/TR/css-cascade-4/>
//!
//! A [`StyleSheet`] owns its rules outright. Combining one sheet into another copies the
//! rules and renumbers their source order after everything already present, so sheets
//! combined later win ties in the cascade.

#![forbid(unsafe_code)]

use core::cmp::Ordering;
pub use css_syntax::Declaration;
use log::debug;

/// Where a style sheet came from.
/// CSS Cascade 4 §6.1: Cascade origins
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Origin {
    UserAgent,
    User,
    #[default]
    Author,
}

/// A style rule inside a [`StyleSheet`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    pub origin: Origin,
    /// Position in the owning sheet's cascade order.
    pub source_order: u32,
    /// Raw selector text.
    pub prelude: String,
    pub declarations: Vec<Declaration>,
    /// Source line the rule was parsed from, for diagnostics.
    pub line: u32,
}

/// An ordered set of style rules.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyleSheet {
    origin: Origin,
    rules: Vec<Rule>,
    /// Source order handed to the next appended rule.
    next_order: u32,
}

impl StyleSheet {
    #[inline]
    pub fn with_origin(origin: Origin) -> Self {
        Self {
            origin,
            rules: Vec::new(),
            next_order: 0,
        }
    }

    /// Build a sheet from parser output, numbering rules in source order.
    pub fn from_parsed(parsed: css_syntax::Stylesheet, origin: Origin) -> Self {
        let mut sheet = Self::with_origin(origin);
        for style_rule in parsed.rules {
            sheet.push_rule(style_rule.prelude, style_rule.declarations, style_rule.line);
        }
        sheet
    }

    /// Append a rule at the end of the cascade order.
    pub fn push_rule(&mut self, prelude: String, declarations: Vec<Declaration>, line: u32) {
        let rule = Rule {
            origin: self.origin,
            source_order: self.next_order,
            prelude,
            declarations,
            line,
        };
        self.next_order = self.next_order.saturating_add(1);
        self.rules.push(rule);
    }

    #[inline]
    pub const fn origin(&self) -> Origin {
        self.origin
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Merge `other`'s rules into this sheet.
    ///
    /// Rules are copied, keep their own origin, and are ordered after every rule
    /// already in `self`; `other` is left untouched.
    /// CSS Cascade 4 §6.4: Order of appearance
    pub fn combine(&mut self, other: &Self) {
        debug!(
            "combining {} rules after {} existing rules",
            other.rules.len(),
            self.rules.len()
        );
        self.rules.reserve(other.rules.len());
        for rule in &other.rules {
            let mut copy = rule.clone();
            copy.source_order = self.next_order;
            self.next_order = self.next_order.saturating_add(1);
            self.rules.push(copy);
        }
    }

    /// The declaration of `property` that wins the cascade among rules whose prelude is
    /// exactly `prelude`.
    pub fn cascaded_value(&self, prelude: &str, property: &str) -> Option<&Declaration> {
        self.rules
            .iter()
            .filter(|rule| rule.prelude == prelude)
            .flat_map(|rule| {
                rule.declarations
                    .iter()
                    .filter(|decl| decl.name == property)
                    .map(move |decl| {
                        let priority =
                            rank_candidate(rule.origin, decl.important, rule.source_order);
                        (priority, decl)
                    })
            })
            .max_by(|left, right| compare_priority(&left.0, &right.0))
            .map(|(_, decl)| decl)
    }
}

/// Priority tuple used to order declarations in the cascade.
/// CSS Cascade 4 §6: Cascade sorting order
#[derive(Clone, Copy, Debug)]
pub struct CascadePriority {
    /// CSS Cascade 4 §6.1: Origins
    pub origin: Origin,
    /// CSS Cascade 4 §6.3: Importance
    pub important: bool,
    /// Source order index, increasing with appearance and with later combines.
    /// CSS Cascade 4 §6.4: Order of appearance
    pub source_order: u32,
}

/// Rank a candidate declaration into a `CascadePriority`.
#[inline]
pub const fn rank_candidate(origin: Origin, important: bool, source_order: u32) -> CascadePriority {
    CascadePriority {
        origin,
        important,
        source_order,
    }
}

/// Compare two `CascadePriority` values according to the cascade rules.
/// Return `Ordering::Greater` if `left` should win over `right`.
/// CSS Cascade 4 §6: Cascade sorting order
pub fn compare_priority(left: &CascadePriority, right: &CascadePriority) -> Ordering {
    // Importance first (important wins)
    if left.important != right.important {
        return bool_order_desc(left.important, right.important);
    }

    // Origin order: UA < User < Author. Important declarations invert it.
    let left_rank = origin_rank(left.origin);
    let right_rank = origin_rank(right.origin);
    if left_rank != right_rank {
        let ordering = left_rank.cmp(&right_rank);
        return if left.important {
            ordering.reverse()
        } else {
            ordering
        };
    }

    // Source order: later wins
    left.source_order.cmp(&right.source_order)
}

/// Return ordering where true > false.
const fn bool_order_desc(a_true_wins: bool, b_true_wins: bool) -> Ordering {
    match (a_true_wins, b_true_wins) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Rank origins: UA < User < Author.
const fn origin_rank(origin: Origin) -> i32 {
    match origin {
        Origin::UserAgent => 0,
        Origin::User => 1,
        Origin::Author => 2,
    }
}
