//! Edit Engine - Command system and undo/redo for the diagram canvas
//!
//! This crate implements the reversible command model: small
//! value-capturing command types, batch execution with atomic
//! swap-on-success semantics, and stack-discipline undo/redo.

mod command;
mod docker_commands;
mod error;
mod executor;
mod group_commands;
mod shape_commands;
mod undo;

pub use command::*;
pub use docker_commands::*;
pub use error::*;
pub use executor::*;
pub use group_commands::*;
pub use shape_commands::*;
pub use undo::*;
