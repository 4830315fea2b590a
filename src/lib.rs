//! Optswitch - cycle visibility among tagged design options.
//!
//! A scene tags mutually-exclusive design alternatives with names
//! following the convention `Option <Group>: <Name>`. Hovering an entity
//! resolves the group its tag belongs to, Ctrl+scroll cycles through the
//! alternatives keeping exactly one visible, and a right-click menu jumps
//! to a specific one or shows them all side by side.
//!
//! The crate splits into a host-agnostic core (`options`, `tool`,
//! `traits`) and the terminal demo host that drives it (`scene`, `app`,
//! `ui`, `terminal`, `cli`). This library root exposes all modules for
//! use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod options;
pub mod scene;
pub mod terminal;
pub mod tool;
pub mod traits;
pub mod ui;
