//! Undoable-operation journal.
//!
//! The demo stand-in for a modeling application's transaction facility:
//! opening an operation snapshots every tag's visibility, committing
//! journals it, and undo restores the snapshot — so every visibility
//! change made between start and commit collapses into one undo step.

use crate::error::HostError;

#[derive(Debug, Clone)]
struct Operation {
    label: String,
    mergeable: bool,
    before: Vec<bool>,
}

/// Journal of committed operations plus the one currently open.
#[derive(Debug, Default)]
pub struct Journal {
    committed: Vec<Operation>,
    open: Option<Operation>,
}

impl Journal {
    /// Open an operation over the given visibility snapshot.
    ///
    /// Operations never nest; a second `start` before `commit` is an
    /// error from the collaborator, reported, not panicked.
    pub fn start(
        &mut self,
        label: &str,
        mergeable: bool,
        snapshot: Vec<bool>,
    ) -> Result<(), HostError> {
        if self.open.is_some() {
            return Err(HostError::OperationStart {
                label: label.to_string(),
                reason: "an operation is already open".to_string(),
            });
        }
        tracing::debug!("operation '{}' started (mergeable: {})", label, mergeable);
        self.open = Some(Operation {
            label: label.to_string(),
            mergeable,
            before: snapshot,
        });
        Ok(())
    }

    /// Commit the open operation.
    ///
    /// A mergeable operation whose label matches the previously committed
    /// mergeable operation folds into it: the older record (and its older
    /// snapshot) stands, so one undo step spans repeated tool sessions.
    pub fn commit(&mut self) -> Result<(), HostError> {
        let operation = self.open.take().ok_or(HostError::NoOpenOperation)?;
        if operation.mergeable {
            if let Some(last) = self.committed.last() {
                if last.mergeable && last.label == operation.label {
                    tracing::debug!("operation '{}' merged into previous", operation.label);
                    return Ok(());
                }
            }
        }
        tracing::debug!("operation '{}' committed", operation.label);
        self.committed.push(operation);
        Ok(())
    }

    /// Pop the latest committed operation, handing back the snapshot to
    /// restore.
    pub fn undo(&mut self) -> Option<Vec<bool>> {
        self.committed.pop().map(|op| op.before)
    }

    pub fn is_open(&self) -> bool {
        self.open.is_some()
    }

    /// Number of committed operations.
    pub fn depth(&self) -> usize {
        self.committed.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_start_is_rejected() {
        let mut journal = Journal::default();
        journal.start("Op", false, vec![true]).unwrap();
        let err = journal.start("Op", false, vec![true]).unwrap_err();
        assert!(matches!(err, HostError::OperationStart { .. }));
    }

    #[test]
    fn test_commit_without_start_is_rejected() {
        let mut journal = Journal::default();
        assert!(matches!(journal.commit(), Err(HostError::NoOpenOperation)));
    }

    #[test]
    fn test_commit_and_undo_round_trip() {
        let mut journal = Journal::default();
        journal.start("Op", false, vec![true, false]).unwrap();
        journal.commit().unwrap();
        assert_eq!(journal.depth(), 1);
        assert_eq!(journal.undo(), Some(vec![true, false]));
        assert_eq!(journal.undo(), None);
    }

    #[test]
    fn test_mergeable_operations_with_same_label_collapse() {
        let mut journal = Journal::default();
        journal.start("Show", true, vec![true, false]).unwrap();
        journal.commit().unwrap();
        journal.start("Show", true, vec![false, true]).unwrap();
        journal.commit().unwrap();

        assert_eq!(journal.depth(), 1, "same-label mergeable commits collapse");
        // The older snapshot stands: undo reaches back to the first start.
        assert_eq!(journal.undo(), Some(vec![true, false]));
    }

    #[test]
    fn test_non_mergeable_operations_stack() {
        let mut journal = Journal::default();
        journal.start("Show", false, vec![true]).unwrap();
        journal.commit().unwrap();
        journal.start("Show", false, vec![false]).unwrap();
        journal.commit().unwrap();
        assert_eq!(journal.depth(), 2);
    }
}
