//! Command contract for reversible canvas mutations

use canvas_model::Canvas;

/// One reversible unit of work against the canvas.
///
/// `execute` performs the mutation and captures whatever state rollback
/// needs - absolute prior positions, full prior group lists - never an
/// inverse delta, so repeated undo/redo cannot drift. `execute` after
/// `rollback` reproduces the original effect, which is what redo relies
/// on.
///
/// Commands validate their preconditions before touching the canvas.
/// Batch-level atomicity (all-or-nothing against the session state) is
/// provided by the session, which executes batches against a working
/// copy and swaps it in on success.
pub trait Command: std::fmt::Debug + Send + Sync {
    /// Apply the mutation, capturing undo state on first execution
    fn execute(&mut self, canvas: &mut Canvas) -> crate::Result<()>;

    /// Restore exactly the state captured by `execute`
    fn rollback(&mut self, canvas: &mut Canvas) -> crate::Result<()>;

    /// Display name for history UIs and logging
    fn display_name(&self) -> &str;
}

/// One or more commands executed, undone, and redone as a single atomic
/// user action
pub type Batch = Vec<Box<dyn Command>>;
