//! The option switcher: the one stateful object behind the tool events.

use super::menu::{MenuAction, MenuBindings};
use super::{EventOutcome, Modifiers, ToolEvents};
use crate::error::HostError;
use crate::options::{self, OptionsGroup};
use crate::traits::{Host, MenuBuilder, MenuItemId};

/// Label of the undoable operation that brackets one tool session.
pub const OPERATION_LABEL: &str = "Show Design Option";

/// Status-bar hint shown while the tool is active.
pub const STATUS_HINT: &str =
    "Hover a design option. Ctrl+scroll cycles options, right-click lists them.";

/// The interactive design-option switcher.
///
/// Holds the group under the pointer and turns host events into group
/// mutations. The group is re-resolved from the live tag table on every
/// hit — nothing about it is cached across pointer events — so renames or
/// deletions in the host model are picked up the moment the pointer moves.
pub struct OptionSwitcher<H: Host> {
    /// Group currently under consideration, if the last hit resolved one.
    current: Option<OptionsGroup<H::Tag>>,
    /// Id → action table for the most recently built menu.
    bindings: MenuBindings,
}

impl<H: Host> OptionSwitcher<H> {
    pub fn new() -> Self {
        Self {
            current: None,
            bindings: MenuBindings::default(),
        }
    }

    /// The group currently under consideration, if any.
    pub fn current(&self) -> Option<&OptionsGroup<H::Tag>> {
        self.current.as_ref()
    }
}

impl<H: Host> Default for OptionSwitcher<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Host> ToolEvents<H> for OptionSwitcher<H> {
    fn activate(&mut self, host: &mut H) -> Result<(), HostError> {
        host.start_operation(OPERATION_LABEL, true)?;
        host.set_status(STATUS_HINT);
        tracing::debug!("option switcher activated");
        Ok(())
    }

    fn deactivate(&mut self, host: &mut H) -> Result<(), HostError> {
        self.current = None;
        self.bindings.clear();
        host.commit_operation()?;
        host.request_redraw();
        tracing::debug!("option switcher deactivated");
        Ok(())
    }

    fn pointer_moved(&mut self, host: &mut H, x: f64, y: f64) {
        let Some(tag) = host.pick(x, y) else {
            // Nothing under the pointer: keep considering the last group,
            // so a scroll over empty space still cycles it.
            return;
        };
        self.current = options::resolve(&tag, &host.tags());
        if let Some(group) = &self.current {
            tracing::trace!(
                "hovering group '{}', option {}/{}",
                group.name(),
                group.index() + 1,
                group.size()
            );
        }
        host.request_redraw();
    }

    fn scrolled(&mut self, host: &mut H, delta: f64, modifiers: Modifiers) -> EventOutcome {
        if !modifiers.constrain() {
            return EventOutcome::PassThrough;
        }
        let Some(group) = self.current.as_mut() else {
            return EventOutcome::PassThrough;
        };
        if delta < 0.0 {
            group.show_next();
        } else {
            group.show_prev();
        }
        tracing::debug!(
            "scrolled group '{}' to '{}'",
            group.name(),
            group.selected_name()
        );
        host.request_redraw();
        EventOutcome::Consumed
    }

    fn build_menu(&mut self, menu: &mut dyn MenuBuilder) {
        self.bindings.clear();
        let Some(group) = &self.current else {
            return;
        };
        for (i, name) in group.option_names().iter().enumerate() {
            let item = menu.add_item(name);
            menu.set_checked(item, group.is_index_visible(i));
            self.bindings.bind(item, MenuAction::ShowOption(i));
        }
        menu.add_separator();
        let show_all = menu.add_item("Show All");
        self.bindings.bind(show_all, MenuAction::ShowAll);
    }

    fn menu_item_activated(&mut self, host: &mut H, item: MenuItemId) {
        let Some(group) = self.current.as_mut() else {
            return;
        };
        match self.bindings.action(item) {
            Some(MenuAction::ShowOption(index)) => group.show_by_index(index),
            Some(MenuAction::ShowAll) => group.show_all(),
            None => {
                tracing::warn!("activation for unknown menu item {:?}", item);
                return;
            }
        }
        host.request_redraw();
    }

    fn tooltip(&self) -> Option<String> {
        self.current.as_ref().map(|group| {
            format!(
                "{}: {} ({}/{})",
                group.name(),
                group.selected_name(),
                group.index() + 1,
                group.size()
            )
        })
    }

    fn suspend(&mut self, host: &mut H) {
        host.request_redraw();
    }

    fn resume(&mut self, host: &mut H) {
        host.set_status(STATUS_HINT);
    }
}
