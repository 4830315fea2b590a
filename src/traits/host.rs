//! Host application abstraction.

use crate::error::HostError;

use super::Tag;

/// The application the switching tool runs inside.
///
/// One object implements every collaborator the tool consumes: hit-testing,
/// the tag table, the undoable-operation boundary, the status line, and
/// redraw scheduling. Keeping them on a single trait keeps the tool generic
/// over exactly one parameter; a host that splits these concerns internally
/// can still forward to its own subsystems.
///
/// Failures from `start_operation`/`commit_operation` are not intercepted
/// by the tool; they propagate to whatever top-level handler the host
/// provides.
pub trait Host {
    /// Handle type for this host's tags.
    type Tag: Tag;

    /// Hit-test screen coordinates.
    ///
    /// Returns the tag of the topmost pickable entity under the pointer,
    /// or `None` when nothing is there. Hidden geometry is not pickable.
    fn pick(&self, x: f64, y: f64) -> Option<Self::Tag>;

    /// Every tag in the model, in host order.
    fn tags(&self) -> Vec<Self::Tag>;

    /// Open an undoable operation labeled `label`.
    ///
    /// All visibility changes made until [`commit_operation`] coalesce into
    /// one undo step. With `mergeable` set, the host may fold consecutive
    /// operations carrying the same label into a single step.
    ///
    /// [`commit_operation`]: Host::commit_operation
    fn start_operation(&mut self, label: &str, mergeable: bool) -> Result<(), HostError>;

    /// Commit the operation opened by [`start_operation`].
    ///
    /// [`start_operation`]: Host::start_operation
    fn commit_operation(&mut self) -> Result<(), HostError>;

    /// Replace the status-bar hint.
    fn set_status(&mut self, hint: &str);

    /// Ask the host to repaint at the next opportunity.
    fn request_redraw(&mut self);
}
