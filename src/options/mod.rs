//! Option-group discovery and selection state.
//!
//! A design option is declared entirely through its tag name, using the
//! convention `Option <Group>: <Name>`. [`resolve`] re-derives the whole
//! group from the live tag table on every relevant pointer event, and the
//! resulting [`OptionsGroup`] carries the mutation operations that keep
//! exactly one option visible at a time.

mod group;
mod resolver;

pub use group::OptionsGroup;
pub use resolver::resolve;
