//! In-memory host and tag handles.

use std::cell::RefCell;
use std::rc::Rc;

use crate::error::HostError;
use crate::traits::{Host, Tag};

/// Tag handle backed by shared in-memory state.
#[derive(Debug, Clone)]
pub struct MockTag {
    state: Rc<RefCell<TagState>>,
}

#[derive(Debug)]
struct TagState {
    name: String,
    visible: bool,
}

impl MockTag {
    /// A visible tag named `name`.
    pub fn new(name: &str) -> Self {
        Self {
            state: Rc::new(RefCell::new(TagState {
                name: name.to_string(),
                visible: true,
            })),
        }
    }

    /// A hidden tag named `name`.
    pub fn hidden(name: &str) -> Self {
        let tag = Self::new(name);
        tag.set_visible(false);
        tag
    }
}

impl Tag for MockTag {
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

/// Scriptable host for driving the tool in tests.
///
/// `pick` returns whatever `pick_result` holds, regardless of the
/// coordinates; tests set it before dispatching a pointer event. Every
/// other collaborator call is recorded for assertions.
pub struct MockHost {
    pub tags: Vec<MockTag>,
    /// Tag returned by the next `pick` call, or `None` for a miss.
    pub pick_result: Option<MockTag>,
    /// `(label, mergeable)` of every started operation, in order.
    pub operations_started: Vec<(String, bool)>,
    pub operations_committed: usize,
    /// Most recent status hint.
    pub status: Option<String>,
    pub redraw_requests: usize,
    /// Make the next `start_operation` fail.
    pub fail_start: bool,
    /// Make the next `commit_operation` fail.
    pub fail_commit: bool,
}

impl MockHost {
    pub fn new(tags: Vec<MockTag>) -> Self {
        Self {
            tags,
            pick_result: None,
            operations_started: Vec::new(),
            operations_committed: 0,
            status: None,
            redraw_requests: 0,
            fail_start: false,
            fail_commit: false,
        }
    }

    /// Host with one visible tag per name.
    pub fn with_tag_names(names: &[&str]) -> Self {
        Self::new(names.iter().map(|n| MockTag::new(n)).collect())
    }

    /// Handle of the tag named `name`. Panics when absent — tests only.
    pub fn tag(&self, name: &str) -> MockTag {
        self.tags
            .iter()
            .find(|t| t.name() == name)
            .cloned()
            .unwrap_or_else(|| panic!("no tag named '{}'", name))
    }
}

impl Host for MockHost {
    type Tag = MockTag;

    fn pick(&self, _x: f64, _y: f64) -> Option<MockTag> {
        self.pick_result.clone()
    }

    fn tags(&self) -> Vec<MockTag> {
        self.tags.clone()
    }

    fn start_operation(&mut self, label: &str, mergeable: bool) -> Result<(), HostError> {
        if self.fail_start {
            return Err(HostError::OperationStart {
                label: label.to_string(),
                reason: "mock failure".to_string(),
            });
        }
        self.operations_started.push((label.to_string(), mergeable));
        Ok(())
    }

    fn commit_operation(&mut self) -> Result<(), HostError> {
        if self.fail_commit {
            return Err(HostError::OperationCommit("mock failure".to_string()));
        }
        self.operations_committed += 1;
        Ok(())
    }

    fn set_status(&mut self, hint: &str) {
        self.status = Some(hint.to_string());
    }

    fn request_redraw(&mut self) {
        self.redraw_requests += 1;
    }
}
