//! Context-menu construction abstraction.

/// Identifier the host assigns to a menu entry it created.
///
/// Opaque to the tool: it only stores ids in its binding table and hands
/// them back when the host reports an activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MenuItemId(pub u32);

/// Receiver for the entries of one context menu.
///
/// The host hands a fresh builder to the tool on every menu request and
/// renders whatever was added. Entry activation is reported back to the
/// tool by id, so the builder carries no callbacks.
pub trait MenuBuilder {
    /// Append an entry and return the id the host assigned to it.
    fn add_item(&mut self, label: &str) -> MenuItemId;

    /// Set the check mark on a previously added entry.
    fn set_checked(&mut self, item: MenuItemId, checked: bool);

    /// Append a separator line.
    fn add_separator(&mut self);
}
