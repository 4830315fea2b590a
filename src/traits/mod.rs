//! Trait abstractions for the host the switcher runs inside.
//!
//! The tool core never talks to a concrete application. Everything it
//! needs from its surroundings — the tag table, hit-testing, the undoable
//! operation boundary, the status line, redraw scheduling, context-menu
//! construction — is reached through the traits here, enabling dependency
//! injection and mocking in tests.
//!
//! # Traits
//!
//! - [`Tag`] - a classification tag with a name and a visibility flag
//! - [`Host`] - the application collaborators, implemented by one object
//! - [`MenuBuilder`] - context-menu construction, one builder per request

pub mod host;
pub mod menu;
pub mod tag;

pub use host::Host;
pub use menu::{MenuBuilder, MenuItemId};
pub use tag::Tag;
