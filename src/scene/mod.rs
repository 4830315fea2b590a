//! The demo host: a flat scene of tagged entities.
//!
//! This is the integration layer a modeling application would normally
//! provide, made concrete so the tool can be driven end to end: a tag
//! table, rectangular entities classified under tags, topmost-first
//! picking, and a journal implementing the undoable-operation boundary.
//! Scenes load from JSON documents; [`sample_scene`] is the compiled-in
//! default.

mod journal;
mod loader;
mod model;

pub use journal::Journal;
pub use loader::{load_scene, sample_scene};
pub use model::{Entity, EntitySpec, Scene, SceneSpec, SceneTag, TagSpec};

use thiserror::Error;

/// Failure while loading or validating a scene document.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("could not read scene file: {0}")]
    Io(#[from] std::io::Error),

    #[error("scene file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate tag name '{0}'")]
    DuplicateTag(String),

    #[error("entity '{0}' references unknown tag '{1}'")]
    UnknownTag(String, String),
}
