//! Concrete implementations of the collaborator traits.
//!
//! The real host lives in [`crate::scene`]; this module carries the mock
//! collaborators shared between unit tests and the integration suites
//! under `tests/`.

pub mod mock;
