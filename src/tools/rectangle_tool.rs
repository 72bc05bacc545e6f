use egui::Pos2;
use log::{debug, info};

use super::{GestureState, Tool, ToolContext, ToolError, ToolResult};
use crate::command::Command;
use crate::element::{factory, Element, ElementType};

/// Drags an axis-aligned rectangle between the anchor and the pointer
#[derive(Debug, Clone, Default)]
pub struct RectangleTool {
    state: GestureState,
}

impl Tool for RectangleTool {
    fn name(&self) -> &'static str {
        "RECTANGLE"
    }

    fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        let mut preview = factory::create_rectangle(pos, pos);
        preview.set_style(preview.style().shape_preview());
        self.state = GestureState::Previewing { anchor: pos, preview };
        debug!("RECTANGLE: Idle -> Previewing at {:?}", pos);
        Ok(None)
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        if let GestureState::Previewing { anchor, preview } = &mut self.state {
            preview.set_corners(*anchor, pos).map_err(ToolError::Geometry)?;
        }
        Ok(None)
    }

    fn on_pointer_up(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        let GestureState::Previewing { anchor, .. } = std::mem::take(&mut self.state) else {
            return Ok(None);
        };
        info!("RECTANGLE: committing {:?} -> {:?}", anchor, pos);
        Ok(Some(Command::insert(factory::create_rectangle(anchor, pos))))
    }

    fn preview(&self) -> Option<&ElementType> {
        self.state.preview()
    }

    fn current_state_name(&self) -> &'static str {
        self.state.name()
    }
}

pub fn new_rectangle_tool() -> RectangleTool {
    RectangleTool::default()
}
