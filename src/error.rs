use thiserror::Error;

use crate::command::CommandError;
use crate::event::Severity;
use crate::tools::ToolError;

/// Errors that surface at the session boundary as user notifications
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditorError {
    #[error("unknown tool \"{0}\"")]
    UnknownTool(String),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("undo failed: {0}")]
    Undo(CommandError),

    #[error("redo failed: {0}")]
    Redo(CommandError),
}

impl EditorError {
    pub fn severity(&self) -> Severity {
        match self {
            EditorError::UnknownTool(_) => Severity::Warning,
            EditorError::Tool(ToolError::NoTarget { .. }) => Severity::Info,
            EditorError::Tool(ToolError::Geometry(_)) => Severity::Warning,
            EditorError::Command(_) | EditorError::Undo(_) | EditorError::Redo(_) => Severity::Error,
        }
    }

    /// Short heading for the notification
    pub fn title(&self) -> &'static str {
        match self {
            EditorError::UnknownTool(_) => "Unknown tool",
            EditorError::Tool(ToolError::NoTarget { .. }) => "No wall",
            EditorError::Tool(ToolError::Geometry(_)) => "Invalid geometry",
            EditorError::Command(_) => "Edit failed",
            EditorError::Undo(_) => "Undo failed",
            EditorError::Redo(_) => "Redo failed",
        }
    }
}

pub type EditorResult<T> = Result<T, EditorError>;
