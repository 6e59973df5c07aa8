//! Undo/redo stacks over command batches

use crate::{Batch, EditError, Result};

/// Stack discipline over command batches.
///
/// A batch is pushed when executed, which invalidates the redo history.
/// Undoing moves the top batch to the redo stack; redoing moves it back.
/// Capacity is unbounded by default; a limit evicts the oldest batch
/// without changing the semantics of what remains.
pub struct UndoManager {
    undo_stack: Vec<Batch>,
    redo_stack: Vec<Batch>,
    limit: Option<usize>,
}

impl UndoManager {
    /// Create an unbounded undo manager
    pub fn new() -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: None,
        }
    }

    /// Create an undo manager that keeps at most `limit` batches
    pub fn with_limit(limit: usize) -> Self {
        Self {
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
            limit: Some(limit),
        }
    }

    /// Record a newly executed batch. Clears the redo stack: redo history
    /// is invalidated by new edits.
    pub fn push(&mut self, batch: Batch) {
        self.redo_stack.clear();
        self.undo_stack.push(batch);
        if let Some(limit) = self.limit {
            while self.undo_stack.len() > limit {
                self.undo_stack.remove(0);
            }
        }
    }

    /// Take the most recent batch for rolling back
    pub fn take_undo(&mut self) -> Result<Batch> {
        self.undo_stack.pop().ok_or(EditError::UndoStackEmpty)
    }

    /// Take the most recent undone batch for re-execution
    pub fn take_redo(&mut self) -> Result<Batch> {
        self.redo_stack.pop().ok_or(EditError::RedoStackEmpty)
    }

    /// Park a rolled-back batch on the redo stack
    pub fn push_undone(&mut self, batch: Batch) {
        self.redo_stack.push(batch);
    }

    /// Return a re-executed batch to the undo stack (does not clear redo)
    pub fn push_redone(&mut self, batch: Batch) {
        self.undo_stack.push(batch);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    pub fn redo_depth(&self) -> usize {
        self.redo_stack.len()
    }

    /// Clear all undo/redo history
    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
    }
}

impl Default for UndoManager {
    fn default() -> Self {
        Self::new()
    }
}
