//! Error types for the optswitch crate.
//!
//! The switching core itself has no error path: a tag that doesn't follow
//! the naming convention, or a group too small to switch, resolves to
//! `None` and is handled silently on the next pointer event. The errors
//! here originate in host collaborators (the undoable-operation facility)
//! and in the demo host's scene loading; they propagate unchanged to the
//! binary edge, which reports them through `color_eyre`.

use thiserror::Error;

pub use crate::scene::SceneError;

/// Failure reported by a host collaborator.
///
/// The tool never produces these on its own; it forwards them with `?`
/// from `activate`/`deactivate` so the host's top-level handler decides
/// what to do.
#[derive(Debug, Error)]
pub enum HostError {
    /// The host refused to open an undoable operation.
    #[error("could not start operation {label:?}: {reason}")]
    OperationStart { label: String, reason: String },

    /// The host failed to commit the open operation.
    #[error("could not commit operation: {0}")]
    OperationCommit(String),

    /// A commit was requested while no operation was open.
    #[error("no operation in progress")]
    NoOpenOperation,
}
