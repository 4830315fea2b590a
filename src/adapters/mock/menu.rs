//! Menu builder that records what the tool adds.

use crate::traits::{MenuBuilder, MenuItemId};

/// One captured menu entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedEntry {
    Item {
        id: MenuItemId,
        label: String,
        checked: bool,
    },
    Separator,
}

/// [`MenuBuilder`] that captures entries for assertions.
#[derive(Debug, Default)]
pub struct RecordingMenu {
    pub entries: Vec<RecordedEntry>,
    next_id: u32,
}

impl RecordingMenu {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(label, checked)` for every item entry, separators skipped.
    pub fn items(&self) -> Vec<(String, bool)> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                RecordedEntry::Item { label, checked, .. } => {
                    Some((label.clone(), *checked))
                }
                RecordedEntry::Separator => None,
            })
            .collect()
    }

    /// Id of the first item labeled `label`, if any.
    pub fn id_of(&self, label: &str) -> Option<MenuItemId> {
        self.entries.iter().find_map(|entry| match entry {
            RecordedEntry::Item { id, label: l, .. } if l == label => Some(*id),
            _ => None,
        })
    }
}

impl MenuBuilder for RecordingMenu {
    fn add_item(&mut self, label: &str) -> MenuItemId {
        let id = MenuItemId(self.next_id);
        self.next_id += 1;
        self.entries.push(RecordedEntry::Item {
            id,
            label: label.to_string(),
            checked: false,
        });
        id
    }

    fn set_checked(&mut self, item: MenuItemId, checked: bool) {
        for entry in &mut self.entries {
            if let RecordedEntry::Item { id, checked: c, .. } = entry {
                if *id == item {
                    *c = checked;
                }
            }
        }
    }

    fn add_separator(&mut self) {
        self.entries.push(RecordedEntry::Separator);
    }
}
