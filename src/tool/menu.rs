//! Context-menu action bindings.

use std::collections::HashMap;

use crate::traits::MenuItemId;

/// Action bound to a context-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    /// Jump straight to the option at this index.
    ShowOption(usize),
    /// Show every option in the group at once.
    ShowAll,
}

/// Table mapping host-assigned menu item ids to tool actions.
///
/// Entries are recorded while a menu is built and looked up when the host
/// reports an activation, so every item resolves its action at invocation
/// time instead of capturing loop state in per-item callbacks.
#[derive(Debug, Default)]
pub(crate) struct MenuBindings {
    actions: HashMap<MenuItemId, MenuAction>,
}

impl MenuBindings {
    /// Drop every binding; called before a menu is (re)built and when the
    /// tool deactivates.
    pub(crate) fn clear(&mut self) {
        self.actions.clear();
    }

    pub(crate) fn bind(&mut self, item: MenuItemId, action: MenuAction) {
        self.actions.insert(item, action);
    }

    pub(crate) fn action(&self, item: MenuItemId) -> Option<MenuAction> {
        self.actions.get(&item).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_resolve_by_id() {
        let mut bindings = MenuBindings::default();
        bindings.bind(MenuItemId(3), MenuAction::ShowOption(1));
        bindings.bind(MenuItemId(9), MenuAction::ShowAll);

        assert_eq!(bindings.action(MenuItemId(3)), Some(MenuAction::ShowOption(1)));
        assert_eq!(bindings.action(MenuItemId(9)), Some(MenuAction::ShowAll));
        assert_eq!(bindings.action(MenuItemId(4)), None);
    }

    #[test]
    fn test_clear_drops_stale_bindings() {
        let mut bindings = MenuBindings::default();
        bindings.bind(MenuItemId(0), MenuAction::ShowAll);
        bindings.clear();
        assert_eq!(bindings.action(MenuItemId(0)), None);
    }
}
