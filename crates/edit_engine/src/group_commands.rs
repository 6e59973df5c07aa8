//! Commands for the grouping subsystem
//!
//! Both commands capture the full prior group list, so rollback restores
//! it exactly regardless of how many groups were absorbed or deleted.

use crate::{Command, EditError, Result};
use canvas_model::{Canvas, Group, ModelError, ShapeId};
use serde::{Deserialize, Serialize};

/// Group a selection, absorbing every intersecting group wholesale
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateGroup {
    pub selection: Vec<ShapeId>,
    prior: Option<Vec<Group>>,
}

impl CreateGroup {
    pub fn new(selection: Vec<ShapeId>) -> Self {
        Self {
            selection,
            prior: None,
        }
    }
}

impl Command for CreateGroup {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.selection.is_empty() {
            return Err(
                ModelError::InvariantViolation("cannot group an empty selection".into()).into(),
            );
        }
        for &id in &self.selection {
            if !canvas.graph.contains(id) {
                return Err(ModelError::ShapeNotFound(id.as_uuid()).into());
            }
        }
        if self.prior.is_none() {
            self.prior = Some(canvas.groups.groups().to_vec());
        }
        canvas.groups.create_group(&self.selection);
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.clone().ok_or(EditError::MissingCapture)?;
        canvas.groups.restore(prior);
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Group"
    }
}

/// Delete every group whose membership exactly equals the selection.
/// Partial matches are not deleted; deleting nothing is a legal outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteGroup {
    pub selection: Vec<ShapeId>,
    prior: Option<Vec<Group>>,
}

impl DeleteGroup {
    pub fn new(selection: Vec<ShapeId>) -> Self {
        Self {
            selection,
            prior: None,
        }
    }
}

impl Command for DeleteGroup {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.prior.is_none() {
            self.prior = Some(canvas.groups.groups().to_vec());
        }
        canvas.groups.delete_group(&self.selection);
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.clone().ok_or(EditError::MissingCapture)?;
        canvas.groups.restore(prior);
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Ungroup"
    }
}
