//! Commands for docker (edge control point) manipulation

use crate::{Command, EditError, Result};
use canvas_model::{Canvas, Docker, EdgeEnd, EdgeEndpoint, ModelError, Point, ShapeId};
use serde::{Deserialize, Serialize};

/// Insert a new interior docker, splitting the edge at the segment
/// nearest to the given position.
///
/// The insertion index is captured on first execution; rollback removes
/// exactly that docker (by index, never by position search, so equal
/// positions stay unambiguous), and redo re-inserts at the same index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddDocker {
    pub edge: ShapeId,
    pub position: Point,
    index: Option<usize>,
}

impl AddDocker {
    pub fn new(edge: ShapeId, position: Point) -> Self {
        Self {
            edge,
            position,
            index: None,
        }
    }
}

impl Command for AddDocker {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        match self.index {
            Some(index) => {
                canvas
                    .graph
                    .insert_docker(self.edge, index, Docker::floating(self.position))?;
            }
            None => {
                self.index = Some(canvas.graph.add_docker(self.edge, self.position)?);
            }
        }
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let index = self.index.ok_or(EditError::MissingCapture)?;
        canvas.graph.remove_docker(self.edge, index)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Add Docker"
    }
}

/// Remove the docker at an index.
///
/// The caller must not construct this for an edge at the two-docker
/// minimum; `execute` fails fast with the graph's invariant violation
/// and leaves the edge unchanged.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoveDocker {
    pub edge: ShapeId,
    pub index: usize,
    removed: Option<Docker>,
}

impl RemoveDocker {
    pub fn new(edge: ShapeId, index: usize) -> Self {
        Self {
            edge,
            index,
            removed: None,
        }
    }
}

impl Command for RemoveDocker {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        self.removed = Some(canvas.graph.remove_docker(self.edge, self.index)?);
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let removed = self.removed.ok_or(EditError::MissingCapture)?;
        canvas.graph.insert_docker(self.edge, self.index, removed)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Remove Docker"
    }
}

/// Move a docker to an absolute position; a docked docker is undocked by
/// the move. The prior docker (position and attachment) is captured
/// wholesale for rollback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveDocker {
    pub edge: ShapeId,
    pub index: usize,
    pub to: Point,
    prior: Option<Docker>,
}

impl MoveDocker {
    pub fn new(edge: ShapeId, index: usize, to: Point) -> Self {
        Self {
            edge,
            index,
            to,
            prior: None,
        }
    }
}

impl Command for MoveDocker {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.prior.is_none() {
            let edge = canvas
                .graph
                .get_edge(self.edge)
                .ok_or(ModelError::ShapeNotFound(self.edge.as_uuid()))?;
            let docker = edge.dockers().get(self.index).ok_or_else(|| {
                ModelError::InvalidReference(format!(
                    "edge {} has no docker at index {}",
                    self.edge, self.index
                ))
            })?;
            self.prior = Some(*docker);
        }
        canvas
            .graph
            .set_docker_position(self.edge, self.index, self.to)?;
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.ok_or(EditError::MissingCapture)?;
        canvas.graph.set_docker(self.edge, self.index, prior)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Move Docker"
    }
}

/// Re-attach (or float) one endpoint of an edge.
///
/// Only the endpoint docker moves; interior bend points are never
/// implicitly repositioned. The entire prior docker sequence is captured
/// so rollback restores every absolute position and attachment exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedockEdge {
    pub edge: ShapeId,
    pub end: EdgeEnd,
    pub endpoint: EdgeEndpoint,
    prior: Option<Vec<Docker>>,
}

impl RedockEdge {
    pub fn new(edge: ShapeId, end: EdgeEnd, endpoint: EdgeEndpoint) -> Self {
        Self {
            edge,
            end,
            endpoint,
            prior: None,
        }
    }
}

impl Command for RedockEdge {
    fn execute(&mut self, canvas: &mut Canvas) -> Result<()> {
        if self.prior.is_none() {
            let edge = canvas
                .graph
                .get_edge(self.edge)
                .ok_or(ModelError::ShapeNotFound(self.edge.as_uuid()))?;
            self.prior = Some(edge.dockers().to_vec());
        }
        canvas.graph.redock(self.edge, self.end, self.endpoint)?;
        Ok(())
    }

    fn rollback(&mut self, canvas: &mut Canvas) -> Result<()> {
        let prior = self.prior.clone().ok_or(EditError::MissingCapture)?;
        canvas.graph.set_dockers(self.edge, prior)?;
        Ok(())
    }

    fn display_name(&self) -> &str {
        "Reconnect Edge"
    }
}
