use egui::Pos2;
use log::{debug, info};

use super::{GestureState, Tool, ToolContext, ToolError, ToolResult};
use crate::command::Command;
use crate::element::{factory, Element, ElementType};

/// Center at the press, radius follows the pointer
#[derive(Debug, Clone, Default)]
pub struct CircleTool {
    state: GestureState,
}

impl Tool for CircleTool {
    fn name(&self) -> &'static str {
        "CIRCLE"
    }

    fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        let mut preview = factory::create_circle(pos, 0.0);
        preview.set_style(preview.style().shape_preview());
        self.state = GestureState::Previewing { anchor: pos, preview };
        debug!("CIRCLE: Idle -> Previewing at {:?}", pos);
        Ok(None)
    }

    fn on_pointer_move(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        if let GestureState::Previewing { anchor, preview } = &mut self.state {
            preview.set_radius(anchor.distance(pos)).map_err(ToolError::Geometry)?;
        }
        Ok(None)
    }

    fn on_pointer_up(&mut self, pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        let GestureState::Previewing { anchor, .. } = std::mem::take(&mut self.state) else {
            return Ok(None);
        };
        let radius = anchor.distance(pos);
        info!("CIRCLE: committing center {:?} radius {:.2}", anchor, radius);
        Ok(Some(Command::insert(factory::create_circle(anchor, radius))))
    }

    fn preview(&self) -> Option<&ElementType> {
        self.state.preview()
    }

    fn current_state_name(&self) -> &'static str {
        self.state.name()
    }
}

pub fn new_circle_tool() -> CircleTool {
    CircleTool::default()
}
