mod commands;
mod context;
mod history;

use thiserror::Error;

use crate::id_generator::ElementId;

pub use commands::Command;
pub use context::CommandContext;
pub use history::{CommandHistory, HistoryEntry};

/// Result type for command operations
pub type CommandResult = Result<(), CommandError>;

/// Errors that can occur while executing or replaying a command
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    #[error("element {0} is not in the scene")]
    ElementNotFound(ElementId),
    #[error("element {0} is already in the scene")]
    DuplicateElement(ElementId),
}
