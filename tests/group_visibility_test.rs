// Integration tests for the visibility invariants of group mutations

mod common;

use common::MockTag;
use optswitch::options::resolve;
use optswitch::traits::Tag;

fn fireplace_tags() -> Vec<MockTag> {
    vec![
        MockTag::new("Walls"),
        MockTag::new("Option Fireplace: Scandi"),
        MockTag::hidden("Option Fireplace: Farmhouse"),
        MockTag::hidden("Option Fireplace: Victorian"),
    ]
}

fn visible_names(all: &[MockTag]) -> Vec<String> {
    all.iter()
        .filter(|t| t.is_visible())
        .map(|t| t.name())
        .collect()
}

#[test]
fn test_cycling_keeps_exactly_one_member_visible() {
    let all = fireplace_tags();
    let mut group = resolve(&all[1], &all).expect("group should resolve");

    for _ in 0..5 {
        group.show_next();
        let visible = visible_names(&all);
        let members_visible = visible
            .iter()
            .filter(|n| n.starts_with("Option Fireplace: "))
            .count();
        assert_eq!(members_visible, 1, "exactly one option visible after a cycle step");
    }
}

#[test]
fn test_cycling_never_touches_non_members() {
    let all = fireplace_tags();
    let mut group = resolve(&all[1], &all).expect("group should resolve");

    group.show_next();
    group.show_prev();
    group.show_by_index(2);
    group.show_all();

    assert!(all[0].is_visible(), "the Walls tag is not the tool's to manage");
}

#[test]
fn test_next_then_prev_restores_the_selection() {
    let all = fireplace_tags();
    let mut group = resolve(&all[1], &all).expect("group should resolve");
    let before = group.index();

    group.show_next();
    group.show_prev();

    assert_eq!(group.index(), before);
    assert_eq!(group.selected_name(), "Scandi");
    assert!(all[1].is_visible());
}

#[test]
fn test_show_by_index_makes_that_option_the_only_visible_one() {
    let all = fireplace_tags();
    let mut group = resolve(&all[1], &all).expect("group should resolve");

    // Sorted order: Farmhouse, Scandi, Victorian.
    group.show_by_index(2);

    for i in 0..group.size() {
        assert_eq!(group.is_index_visible(i), i == 2);
    }
    assert_eq!(group.selected_name(), "Victorian");
}

#[test]
fn test_show_all_makes_every_member_visible() {
    let all = fireplace_tags();
    let mut group = resolve(&all[1], &all).expect("group should resolve");

    group.show_all();

    for i in 0..group.size() {
        assert!(group.is_index_visible(i), "option {} should be visible", i);
    }
    // The selection survives for the next cycle step.
    assert_eq!(group.selected_name(), "Scandi");
}
