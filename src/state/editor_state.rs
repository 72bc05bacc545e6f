use log::info;

use crate::tools::{Tool, ToolType};

/// Whether a drawing tool owns the pointer.
///
/// With no tool the editor is in selection mode: presses pick elements.
#[derive(Debug, Clone, Default)]
pub enum EditorState {
    #[default]
    Idle,
    UsingTool {
        active_tool: ToolType,
    },
}

impl EditorState {
    /// Swap in `tool`, deactivating the outgoing one first.
    ///
    /// Returns the name of the tool that was replaced.
    pub fn set_active_tool(&mut self, mut tool: ToolType) -> Option<&'static str> {
        let old = self.clear_tool();
        tool.activate();
        info!("Tool: {:?} -> {}", old, tool.name());
        *self = Self::UsingTool { active_tool: tool };
        old
    }

    /// Deactivate the current tool, if any, and return to selection mode
    pub fn clear_tool(&mut self) -> Option<&'static str> {
        match std::mem::take(self) {
            Self::UsingTool { mut active_tool } => {
                active_tool.deactivate();
                Some(active_tool.name())
            }
            Self::Idle => None,
        }
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        match self {
            Self::UsingTool { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }

    pub fn active_tool_mut(&mut self) -> Option<&mut ToolType> {
        match self {
            Self::UsingTool { active_tool } => Some(active_tool),
            Self::Idle => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
