#![cfg(test)]

use css_selectors::{
    AnB, SelectorRegistry, SiblingPosition, StructuralMatcherKind, StructuralSelector, parse_nth,
};

#[test]
fn nth_keywords_and_forms() {
    assert_eq!(parse_nth("even"), AnB::new(2, 0));
    assert_eq!(parse_nth("odd"), AnB::new(2, 1));
    assert_eq!(parse_nth(" odd "), AnB::new(2, 1));
    assert_eq!(parse_nth("3"), AnB::new(0, 3));
    assert_eq!(parse_nth("n"), AnB::new(1, 0));
    assert_eq!(parse_nth("-n"), AnB::new(-1, 0));
    assert_eq!(parse_nth("2n+1"), AnB::new(2, 1));
    assert_eq!(parse_nth("-2n-3"), AnB::new(-2, -3));
    assert_eq!(parse_nth("-n+6"), AnB::new(-1, 6));
    assert_eq!(parse_nth("3n + 4"), AnB::new(3, 4));
}

#[test]
fn nth_malformed_input_degrades_to_zero() {
    assert_eq!(parse_nth("n+"), AnB::new(1, 0));
    assert_eq!(parse_nth("2n-"), AnB::new(2, 0));
    assert_eq!(parse_nth(""), AnB::new(0, 0));
    assert_eq!(parse_nth("bogus"), AnB::new(0, 0));
    assert_eq!(parse_nth("xn+2"), AnB::new(0, 2));
    assert_eq!(parse_nth("2n3"), AnB::new(2, 0));
}

#[test]
fn nth_parsing_is_pure() {
    for input in ["2n+1", "odd", "-n+3", "garbage"] {
        assert_eq!(parse_nth(input), parse_nth(input));
    }
}

#[test]
fn anb_index_matching() {
    let odd = AnB::new(2, 1);
    assert!(odd.matches(1));
    assert!(!odd.matches(2));
    assert!(odd.matches(7));

    let first_three = AnB::new(-1, 3);
    assert!(first_three.matches(1));
    assert!(first_three.matches(3));
    assert!(!first_three.matches(4));

    let only_fifth = AnB::new(0, 5);
    assert!(only_fifth.matches(5));
    assert!(!only_fifth.matches(10));

    // Offsets before the first sibling only match through n >= 0.
    let shifted = AnB::new(3, -2);
    assert!(shifted.matches(1));
    assert!(shifted.matches(4));
    assert!(!shifted.matches(2));
}

#[test]
fn registry_resolves_known_names() {
    let registry = SelectorRegistry::new();
    assert_eq!(registry.len(), StructuralMatcherKind::ALL.len());

    let odd_children = registry.resolve("nth-child(2n+1)");
    assert_eq!(odd_children.kind, Some(StructuralMatcherKind::NthChild));
    assert_eq!(odd_children.nth(), AnB::new(2, 1));

    let bare = registry.resolve("nth-child");
    assert_eq!(bare.kind, Some(StructuralMatcherKind::NthChild));
    assert_eq!(bare.nth(), AnB::new(1, 0));

    let unterminated = registry.resolve("nth-of-type(2n+1");
    assert_eq!(unterminated.kind, Some(StructuralMatcherKind::NthOfType));
    assert_eq!(unterminated.nth(), AnB::new(1, 0));

    for kind in StructuralMatcherKind::ALL {
        assert_eq!(registry.resolve(kind.name()).kind, Some(kind));
    }
}

#[test]
fn registry_unknown_names_resolve_to_none() {
    let registry = SelectorRegistry::new();
    let bogus = registry.resolve("bogus-name");
    assert!(bogus.is_none());
    assert_eq!(bogus, StructuralSelector::NONE);
    assert_eq!((bogus.step, bogus.offset), (0, 0));
    assert!(registry.resolve("hover(2n)").is_none());
    assert_eq!(registry.resolve("nth-child(odd)"), registry.resolve("nth-child(odd)"));
}

#[test]
fn kind_names_round_trip() {
    for kind in StructuralMatcherKind::ALL {
        assert_eq!(StructuralMatcherKind::from_name(kind.name()), Some(kind));
    }
    assert_eq!(StructuralMatcherKind::from_name("nth-child(2n)"), None);
    assert_eq!(StructuralMatcherKind::from_name("hover"), None);
}

/// Position of the `index`-th of `count` children, all sharing one tag.
fn uniform(index: usize, count: usize) -> SiblingPosition {
    SiblingPosition {
        index,
        count,
        type_index: index,
        type_count: count,
        has_children: true,
    }
}

#[test]
fn matcher_kinds_follow_sibling_position() {
    let registry = SelectorRegistry::new();
    let last_two = registry.resolve("nth-last-child(-n+2)");
    assert!(!last_two.matches(&uniform(3, 5)));
    assert!(last_two.matches(&uniform(4, 5)));
    assert!(last_two.matches(&uniform(5, 5)));

    let mixed = SiblingPosition {
        index: 4,
        count: 6,
        type_index: 2,
        type_count: 2,
        has_children: false,
    };
    assert!(registry.resolve("nth-of-type(even)").matches(&mixed));
    assert!(registry.resolve("nth-last-of-type(1)").matches(&mixed));
    assert!(registry.resolve("last-of-type").matches(&mixed));
    assert!(!registry.resolve("first-of-type").matches(&mixed));
    assert!(!registry.resolve("last-child").matches(&mixed));
    assert!(registry.resolve("empty").matches(&mixed));
    assert!(!registry.resolve("only-of-type").matches(&mixed));

    assert!(registry.resolve("first-child").matches(&uniform(1, 3)));
    assert!(registry.resolve("only-child").matches(&uniform(1, 1)));
    assert!(!registry.resolve("empty").matches(&uniform(1, 1)));
    assert!(!StructuralSelector::NONE.matches(&uniform(1, 1)));
}
