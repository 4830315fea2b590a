//! Scene data model and the `Host` implementation over it.

use std::cell::RefCell;
use std::rc::Rc;

use serde::Deserialize;

use super::journal::Journal;
use super::SceneError;
use crate::error::HostError;
use crate::traits::{Host, Tag};

fn default_visible() -> bool {
    true
}

/// One tag row in a scene document.
#[derive(Debug, Clone, Deserialize)]
pub struct TagSpec {
    pub name: String,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// One drawable entity in a scene document. Coordinates are viewport
/// cells; entities later in the list draw (and pick) on top.
#[derive(Debug, Clone, Deserialize)]
pub struct EntitySpec {
    pub label: String,
    pub tag: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Scene document as stored on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct SceneSpec {
    pub tags: Vec<TagSpec>,
    pub entities: Vec<EntitySpec>,
}

/// Shared handle over one scene tag.
#[derive(Debug, Clone)]
pub struct SceneTag {
    state: Rc<RefCell<TagState>>,
}

#[derive(Debug)]
struct TagState {
    name: String,
    visible: bool,
}

impl SceneTag {
    fn new(name: String, visible: bool) -> Self {
        Self {
            state: Rc::new(RefCell::new(TagState { name, visible })),
        }
    }
}

impl Tag for SceneTag {
    fn name(&self) -> String {
        self.state.borrow().name.clone()
    }

    fn is_visible(&self) -> bool {
        self.state.borrow().visible
    }

    fn set_visible(&self, visible: bool) {
        self.state.borrow_mut().visible = visible;
    }
}

/// A drawable entity classified under one tag.
#[derive(Debug, Clone)]
pub struct Entity {
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    tag: SceneTag,
}

impl Entity {
    pub fn tag(&self) -> &SceneTag {
        &self.tag
    }

    /// Whether the entity is shown, i.e. its tag is visible.
    pub fn is_visible(&self) -> bool {
        self.tag.is_visible()
    }

    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x < self.x + self.width && y >= self.y && y < self.y + self.height
    }
}

/// The demo host model: tags, entities, and the operation journal.
#[derive(Debug)]
pub struct Scene {
    tags: Vec<SceneTag>,
    entities: Vec<Entity>,
    journal: Journal,
    status: String,
    dirty: bool,
}

impl Scene {
    /// Build a scene from a parsed document, validating tag references.
    pub fn from_spec(spec: SceneSpec) -> Result<Self, SceneError> {
        let mut tags: Vec<SceneTag> = Vec::with_capacity(spec.tags.len());
        for tag_spec in spec.tags {
            if tags.iter().any(|t| t.name() == tag_spec.name) {
                return Err(SceneError::DuplicateTag(tag_spec.name));
            }
            tags.push(SceneTag::new(tag_spec.name, tag_spec.visible));
        }

        let mut entities = Vec::with_capacity(spec.entities.len());
        for entity_spec in spec.entities {
            let tag = tags
                .iter()
                .find(|t| t.name() == entity_spec.tag)
                .cloned()
                .ok_or_else(|| {
                    SceneError::UnknownTag(entity_spec.label.clone(), entity_spec.tag.clone())
                })?;
            entities.push(Entity {
                label: entity_spec.label,
                x: entity_spec.x,
                y: entity_spec.y,
                width: entity_spec.width,
                height: entity_spec.height,
                tag,
            });
        }

        Ok(Self {
            tags,
            entities,
            journal: Journal::default(),
            status: String::new(),
            dirty: true,
        })
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Number of committed undo steps.
    pub fn undo_depth(&self) -> usize {
        self.journal.depth()
    }

    /// Flag the scene for repaint; the event loop clears it with
    /// [`take_dirty`](Self::take_dirty).
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Restore the visibility snapshot of the latest committed operation.
    ///
    /// Refused while an operation is open — the tool owns the model until
    /// it commits. Returns whether anything was undone.
    pub fn undo(&mut self) -> bool {
        if self.journal.is_open() {
            tracing::debug!("undo refused: an operation is open");
            return false;
        }
        let Some(snapshot) = self.journal.undo() else {
            return false;
        };
        for (tag, visible) in self.tags.iter().zip(snapshot) {
            tag.set_visible(visible);
        }
        self.dirty = true;
        true
    }

    fn visibility_snapshot(&self) -> Vec<bool> {
        self.tags.iter().map(|t| t.is_visible()).collect()
    }
}

impl Host for Scene {
    type Tag = SceneTag;

    fn pick(&self, x: f64, y: f64) -> Option<SceneTag> {
        // Later entities draw on top, so scan in reverse for the topmost
        // hit. Hidden geometry is not pickable.
        self.entities
            .iter()
            .rev()
            .find(|e| e.is_visible() && e.contains(x, y))
            .map(|e| e.tag.clone())
    }

    fn tags(&self) -> Vec<SceneTag> {
        self.tags.clone()
    }

    fn start_operation(&mut self, label: &str, mergeable: bool) -> Result<(), HostError> {
        let snapshot = self.visibility_snapshot();
        self.journal.start(label, mergeable, snapshot)
    }

    fn commit_operation(&mut self) -> Result<(), HostError> {
        self.journal.commit()
    }

    fn set_status(&mut self, hint: &str) {
        self.status = hint.to_string();
        self.dirty = true;
    }

    fn request_redraw(&mut self) {
        self.dirty = true;
    }
}
