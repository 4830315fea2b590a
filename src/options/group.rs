//! Selection state for one group of design options.

use crate::traits::Tag;

/// A resolved group of mutually-exclusive design options.
///
/// Built by [`resolve`](super::resolve) and discarded as soon as the
/// pointer settles on a different group or the tool deactivates; the only
/// state that outlives it is the visibility already applied to the host's
/// tags.
///
/// `option_names` and the tag handles are index-aligned and sorted by full
/// tag name ascending. `size()` is at least 2 and `index()` always
/// addresses a member.
#[derive(Debug, Clone)]
pub struct OptionsGroup<T: Tag> {
    name: String,
    option_names: Vec<String>,
    entities: Vec<T>,
    index: usize,
}

impl<T: Tag> OptionsGroup<T> {
    pub(crate) fn new(
        name: String,
        option_names: Vec<String>,
        entities: Vec<T>,
        index: usize,
    ) -> Self {
        debug_assert_eq!(option_names.len(), entities.len());
        debug_assert!(index < entities.len());
        Self {
            name,
            option_names,
            entities,
            index,
        }
    }

    /// Group identifier extracted from the tag names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of options in the group.
    pub fn size(&self) -> usize {
        self.entities.len()
    }

    /// Index of the currently selected option.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Option names in sorted tag-name order.
    pub fn option_names(&self) -> &[String] {
        &self.option_names
    }

    /// Name of the currently selected option.
    pub fn selected_name(&self) -> &str {
        &self.option_names[self.index]
    }

    /// Show every option at once, for side-by-side comparison.
    ///
    /// The selection index is left untouched, so a later cycle step
    /// continues from the option that was selected before.
    pub fn show_all(&mut self) {
        for entity in &self.entities {
            entity.set_visible(true);
        }
    }

    /// Advance to the next option, wrapping at the end.
    pub fn show_next(&mut self) {
        self.index = (self.index + 1) % self.entities.len();
        self.apply_selection();
    }

    /// Step back to the previous option, wrapping at the start.
    pub fn show_prev(&mut self) {
        self.index = (self.index + self.entities.len() - 1) % self.entities.len();
        self.apply_selection();
    }

    /// Jump straight to the option at `index`.
    ///
    /// An out-of-range index is refused: this group is a snapshot, and the
    /// host's tag set may have changed between resolution and a late menu
    /// activation. Showing a clamped neighbor instead would desync the
    /// screen from what the user picked.
    pub fn show_by_index(&mut self, index: usize) {
        if index >= self.entities.len() {
            tracing::warn!(
                "show_by_index({}) out of range for group '{}' (size {})",
                index,
                self.name,
                self.entities.len()
            );
            return;
        }
        self.index = index;
        self.apply_selection();
    }

    /// Whether the tag named `name` is a member of this group.
    pub fn contains_tag(&self, name: &str) -> bool {
        self.entities.iter().any(|entity| entity.name() == name)
    }

    /// Whether the option at `index` is currently visible.
    ///
    /// Reads the live flag rather than comparing against the selection:
    /// external mutation or [`show_all`](Self::show_all) may have left
    /// several options visible at once. Out-of-range indices read as
    /// hidden.
    pub fn is_index_visible(&self, index: usize) -> bool {
        self.entities
            .get(index)
            .map(|entity| entity.is_visible())
            .unwrap_or(false)
    }

    /// Restore the single-selection invariant: the selected option shown,
    /// every other member hidden.
    fn apply_selection(&self) {
        for (i, entity) in self.entities.iter().enumerate() {
            entity.set_visible(i == self.index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockTag;

    fn group_of(names: &[&str]) -> OptionsGroup<MockTag> {
        let entities: Vec<MockTag> = names.iter().map(|n| MockTag::new(n)).collect();
        let option_names = names.iter().map(|n| n.to_string()).collect();
        OptionsGroup::new("Test".to_string(), option_names, entities, 0)
    }

    #[test]
    fn test_next_prev_round_trip() {
        let mut group = group_of(&["A", "B", "C"]);
        group.show_next();
        assert_eq!(group.index(), 1);
        group.show_prev();
        assert_eq!(group.index(), 0);
    }

    #[test]
    fn test_cycling_wraps_both_ways() {
        let mut group = group_of(&["A", "B"]);
        group.show_prev();
        assert_eq!(group.index(), 1, "show_prev should wrap to the last option");
        group.show_next();
        assert_eq!(group.index(), 0, "show_next should wrap back to the first");
    }

    #[test]
    fn test_selection_hides_all_other_members() {
        let mut group = group_of(&["A", "B", "C"]);
        group.show_next();
        assert!(!group.is_index_visible(0));
        assert!(group.is_index_visible(1));
        assert!(!group.is_index_visible(2));
    }

    #[test]
    fn test_show_all_leaves_index_alone() {
        let mut group = group_of(&["A", "B", "C"]);
        group.show_by_index(2);
        group.show_all();
        assert_eq!(group.index(), 2);
        for i in 0..3 {
            assert!(group.is_index_visible(i), "option {} should be visible", i);
        }
    }

    #[test]
    fn test_show_by_index_out_of_range_is_a_no_op() {
        let mut group = group_of(&["A", "B"]);
        group.show_by_index(1);
        group.show_by_index(7);
        assert_eq!(group.index(), 1, "out-of-range jump must not move the selection");
        assert!(group.is_index_visible(1));
    }

    #[test]
    fn test_is_index_visible_out_of_range_reads_hidden() {
        let group = group_of(&["A", "B"]);
        assert!(!group.is_index_visible(5));
    }

    #[test]
    fn test_is_index_visible_sees_external_mutation() {
        let entities = vec![MockTag::new("A"), MockTag::new("B")];
        let outside_handle = entities[1].clone();
        let mut group = OptionsGroup::new(
            "Test".to_string(),
            vec!["A".to_string(), "B".to_string()],
            entities,
            0,
        );
        group.show_by_index(0);
        assert!(!group.is_index_visible(1));

        // Something other than the tool shows the second tag.
        outside_handle.set_visible(true);
        assert!(group.is_index_visible(1));
    }
}
