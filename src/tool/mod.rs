//! The interactive switching tool.
//!
//! [`ToolEvents`] is the contract between a host's event loop and the
//! tool: one method per event the host delivers, implemented by the single
//! stateful [`OptionSwitcher`] object. The host owns the loop and calls
//! exactly one method per event; handlers run to completion before the
//! next event is dispatched, so implementations need no locking.

mod menu;
mod switcher;

pub use menu::MenuAction;
pub use switcher::{OptionSwitcher, OPERATION_LABEL, STATUS_HINT};

use crate::error::HostError;
use crate::traits::{Host, MenuBuilder, MenuItemId};

/// Keyboard modifiers accompanying a scroll event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub control: bool,
    pub alt: bool,
}

impl Modifiers {
    /// Whether the designated constrain modifier is held.
    ///
    /// Control is the constrain key: terminals commonly reserve
    /// Shift+wheel for their own scrollback.
    pub fn constrain(self) -> bool {
        self.control
    }
}

/// What the host should do with an input event after the tool saw it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// The tool acted on the event; the host's default handling (e.g.
    /// zoom-on-scroll) must be suppressed.
    Consumed,
    /// The tool ignored the event; default handling applies.
    PassThrough,
}

/// Event-handler contract between host and tool.
///
/// A missing hit or an unresolvable tag is a normal state for every method
/// here, never an error; only the operation boundary in
/// [`activate`](Self::activate)/[`deactivate`](Self::deactivate) can fail,
/// and then only with an error the host's own collaborators produced.
pub trait ToolEvents<H: Host> {
    /// The tool became the active tool. Opens the undoable operation that
    /// collects every visibility change of this session.
    fn activate(&mut self, host: &mut H) -> Result<(), HostError>;

    /// The tool is about to be deactivated. Commits the session operation.
    fn deactivate(&mut self, host: &mut H) -> Result<(), HostError>;

    /// The pointer moved to screen coordinates `(x, y)`.
    fn pointer_moved(&mut self, host: &mut H, x: f64, y: f64);

    /// The scroll wheel moved by `delta` steps with `modifiers` held.
    /// Negative `delta` is a scroll toward the user.
    fn scrolled(&mut self, host: &mut H, delta: f64, modifiers: Modifiers) -> EventOutcome;

    /// The user requested a context menu; populate `menu` with entries.
    fn build_menu(&mut self, menu: &mut dyn MenuBuilder);

    /// An entry created by [`build_menu`](Self::build_menu) was activated.
    fn menu_item_activated(&mut self, host: &mut H, item: MenuItemId);

    /// Tooltip to draw next to the pointer, when there is one.
    fn tooltip(&self) -> Option<String>;

    /// Input and redraw delivery is being paused (a modal opened, another
    /// tool took over). In-flight state stays as it is.
    fn suspend(&mut self, host: &mut H);

    /// Delivery resumed after [`suspend`](Self::suspend).
    fn resume(&mut self, host: &mut H);
}
