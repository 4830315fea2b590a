//! Discovery of option groups from the tag naming convention.

use once_cell::sync::Lazy;
use regex::Regex;

use super::OptionsGroup;
use crate::traits::Tag;

/// Outer match for a single tag name: the literal `Option ` prefix, a
/// group name without colons, a colon, then the option name. The space
/// after the colon is optional here, while the sibling scan below requires
/// the canonical `": "` separator — a tag written without the space will
/// therefore not find itself among its own siblings.
static OPTION_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Option ([^:]+):\s*(.*)$").expect("Invalid option tag regex"));

struct Member<T> {
    tag_name: String,
    option_name: String,
    tag: T,
}

/// Derive the options group `tag` belongs to, if any.
///
/// Returns `None` when the name does not follow the convention, or when
/// the group has fewer than two members — a singleton has nothing to
/// switch between. Both are everyday outcomes on pointer movement, not
/// errors, and no variant of this function panics or reports one.
///
/// The returned group's names and tag handles are index-aligned, sorted by
/// full tag name ascending (ties keep discovery order), with `index()`
/// addressing the tag passed in.
pub fn resolve<T: Tag>(tag: &T, all_tags: &[T]) -> Option<OptionsGroup<T>> {
    let tag_name = tag.name();
    let captures = OPTION_TAG.captures(&tag_name)?;
    let group_name = &captures[1];

    // The group name is user-chosen and embedded into a second pattern;
    // escape it so a name like "Roof (v2)" scans literally.
    let sibling_pattern = format!("^Option {}: (.*)$", regex::escape(group_name));
    let siblings = Regex::new(&sibling_pattern).expect("Invalid sibling scan regex");

    let mut members: Vec<Member<T>> = Vec::new();
    for candidate in all_tags {
        let candidate_name = candidate.name();
        if let Some(caps) = siblings.captures(&candidate_name) {
            members.push(Member {
                option_name: caps[1].to_string(),
                tag_name: candidate_name,
                tag: candidate.clone(),
            });
        }
    }

    // Stable sort: members with identical tag names keep discovery order.
    members.sort_by(|a, b| a.tag_name.cmp(&b.tag_name));

    if members.len() < 2 {
        tracing::trace!("tag '{}' has no siblings to switch between", tag_name);
        return None;
    }

    let index = members.iter().position(|m| m.tag_name == tag_name)?;

    let mut option_names = Vec::with_capacity(members.len());
    let mut entities = Vec::with_capacity(members.len());
    for member in members {
        option_names.push(member.option_name);
        entities.push(member.tag);
    }

    Some(OptionsGroup::new(
        group_name.to_string(),
        option_names,
        entities,
        index,
    ))
}
