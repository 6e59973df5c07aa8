//! Editor session - command execution engine and sole mutation entry point

use crate::{Batch, EditError, Result, UndoManager};
use canvas_model::{Canvas, DiagramGraph, GroupRegistry};

type ChangeListener = Box<dyn FnMut() + Send>;

/// One editing session: the canvas, its undo/redo history, and the
/// change-notification boundary.
///
/// All state is owned by the session instance - there are no process-wide
/// registries - so constructing a fresh session per test (or per open
/// model) is cheap and isolated. Access is single-threaded by
/// construction; commands run synchronously to completion.
///
/// `submit_batch` is the only way to mutate the canvas. Batches execute
/// against a working copy which is swapped in on success, so a failing
/// command can never leave the session partially mutated.
pub struct EditorSession {
    canvas: Canvas,
    undo_manager: UndoManager,
    listeners: Vec<ChangeListener>,
}

impl EditorSession {
    /// Create a session with an empty canvas
    pub fn new() -> Self {
        Self {
            canvas: Canvas::new(),
            undo_manager: UndoManager::new(),
            listeners: Vec::new(),
        }
    }

    /// Create a session with a bounded undo history
    pub fn with_undo_limit(limit: usize) -> Self {
        Self {
            canvas: Canvas::new(),
            undo_manager: UndoManager::with_limit(limit),
            listeners: Vec::new(),
        }
    }

    /// The current canvas
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The current shape graph
    pub fn graph(&self) -> &DiagramGraph {
        &self.canvas.graph
    }

    /// The current group registry
    pub fn groups(&self) -> &GroupRegistry {
        &self.canvas.groups
    }

    /// Subscribe to the "graph changed" notification. Fired once after
    /// every successful batch execution, undo, and redo - no payload;
    /// observers re-read the canvas.
    pub fn on_change(&mut self, listener: impl FnMut() + Send + 'static) {
        self.listeners.push(Box::new(listener));
    }

    /// Execute a batch of commands as one atomic user action.
    ///
    /// On any command failure the session state is untouched, the error
    /// is returned, and the undo history is left as it was. On success
    /// the batch lands on the undo stack and the redo stack clears.
    pub fn submit_batch(&mut self, mut batch: Batch) -> Result<()> {
        if batch.is_empty() {
            return Err(EditError::EmptyBatch);
        }

        let mut working = self.canvas.clone();
        for command in batch.iter_mut() {
            command.execute(&mut working)?;
        }

        tracing::debug!(
            commands = ?batch.iter().map(|c| c.display_name()).collect::<Vec<_>>(),
            "batch executed"
        );
        self.canvas = working;
        self.undo_manager.push(batch);
        self.notify();
        Ok(())
    }

    /// Roll back the most recent batch, in reverse command order
    pub fn undo(&mut self) -> Result<()> {
        let mut batch = self.undo_manager.take_undo()?;

        let mut working = self.canvas.clone();
        let mut failure = None;
        for command in batch.iter_mut().rev() {
            if let Err(e) = command.rollback(&mut working) {
                failure = Some(e);
                break;
            }
        }
        if let Some(e) = failure {
            // Rollback of a value-capturing command failing is a
            // programming error; keep the history coherent and surface it.
            self.undo_manager.push_redone(batch);
            return Err(e);
        }

        tracing::debug!(commands = batch.len(), "batch undone");
        self.canvas = working;
        self.undo_manager.push_undone(batch);
        self.notify();
        Ok(())
    }

    /// Re-execute the most recently undone batch, in forward command order
    pub fn redo(&mut self) -> Result<()> {
        let mut batch = self.undo_manager.take_redo()?;

        let mut working = self.canvas.clone();
        let mut failure = None;
        for command in batch.iter_mut() {
            if let Err(e) = command.execute(&mut working) {
                failure = Some(e);
                break;
            }
        }
        if let Some(e) = failure {
            self.undo_manager.push_undone(batch);
            return Err(e);
        }

        tracing::debug!(commands = batch.len(), "batch redone");
        self.canvas = working;
        self.undo_manager.push_redone(batch);
        self.notify();
        Ok(())
    }

    /// Replace the canvas with a loaded graph.
    ///
    /// Atomic whole-snapshot replacement: groups reset and both history
    /// stacks clear. Loading is not undoable.
    pub fn load_graph(&mut self, graph: DiagramGraph) {
        self.canvas = Canvas::from_graph(graph);
        self.undo_manager.clear();
    }

    pub fn can_undo(&self) -> bool {
        self.undo_manager.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.undo_manager.can_redo()
    }

    fn notify(&mut self) {
        for listener in self.listeners.iter_mut() {
            listener();
        }
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
