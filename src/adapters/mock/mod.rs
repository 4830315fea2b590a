//! Mock collaborators for tests.
//!
//! [`MockHost`] is a scriptable [`Host`](crate::traits::Host): tests seed
//! the tag table and the next pick result, dispatch tool events, and
//! assert on the recorded collaborator calls. [`RecordingMenu`] captures
//! menu construction so tests can inspect labels, check marks, and
//! separators.

mod host;
mod menu;

pub use host::{MockHost, MockTag};
pub use menu::{RecordedEntry, RecordingMenu};
