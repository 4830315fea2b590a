//! Tag collaborator abstraction.

/// A classification tag owned by the host model.
///
/// Handles are cheap clones sharing the underlying host state; the demo
/// host backs them with `Rc<RefCell<_>>`, a modeling application would
/// wrap its own entity references. Execution is single-threaded and
/// event-driven, so no synchronization is required of implementations.
///
/// The switcher only reads the name and toggles the visibility flag. It
/// never creates, renames, or deletes a tag.
pub trait Tag: Clone {
    /// The tag's unique name, e.g. `"Option Fireplace: Scandi"`.
    fn name(&self) -> String;

    /// Whether geometry classified under this tag is currently shown.
    fn is_visible(&self) -> bool;

    /// Show or hide everything classified under this tag.
    fn set_visible(&self, visible: bool);
}
