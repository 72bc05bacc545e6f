use egui::Pos2;
use log::{debug, info, warn};

use super::{Positioning, Tool, ToolContext, ToolError, ToolResult};
use crate::command::Command;
use crate::element::{factory, AttachmentKind, Element, ElementType};
use crate::geometry::{nearest_wall_within, WallProjection};

/// Places switches and outlets on the nearest wall.
///
/// There is no drag phase: moving shows where the glyph would land, a press
/// commits it there.
#[derive(Debug, Clone)]
pub struct AttachmentTool {
    kind: AttachmentKind,
    hover: Option<ElementType>,
}

impl AttachmentTool {
    pub fn new(kind: AttachmentKind) -> Self {
        Self { kind, hover: None }
    }

    pub fn kind(&self) -> AttachmentKind {
        self.kind
    }

    fn target(pos: Pos2, ctx: &ToolContext<'_>) -> Option<WallProjection> {
        nearest_wall_within(pos, ctx.scene.walls(), ctx.config.attachment_snap_range)
    }
}

impl Tool for AttachmentTool {
    fn name(&self) -> &'static str {
        match self.kind {
            AttachmentKind::Switch => "SWITCH",
            AttachmentKind::Outlet => "OUTLET",
        }
    }

    fn positioning(&self) -> Positioning {
        Positioning::Free
    }

    fn cancel(&mut self) {
        self.hover = None;
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        let Some(hit) = Self::target(pos, ctx) else {
            warn!("{}: no wall near {:?}", self.name(), pos);
            return Err(ToolError::NoTarget {
                range: ctx.config.attachment_snap_range,
            });
        };

        self.hover = None;
        let element = factory::create_attachment(self.kind, hit.point, hit.angle, ctx.config.attachment_size);
        info!("{}: placing on wall {} at {:?}", self.name(), hit.wall_id, hit.point);
        Ok(Some(Command::insert(element)))
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        let Some(hit) = Self::target(pos, ctx) else {
            if self.hover.take().is_some() {
                debug!("{}: hover preview left wall range", self.name());
            }
            return Ok(None);
        };

        match &mut self.hover {
            Some(preview) => preview.set_placement(hit.point, hit.angle).map_err(ToolError::Geometry)?,
            None => {
                let mut preview =
                    factory::create_attachment(self.kind, hit.point, hit.angle, ctx.config.attachment_size);
                preview.set_style(preview.style().as_preview());
                self.hover = Some(preview);
            }
        }
        Ok(None)
    }

    fn on_pointer_up(&mut self, _pos: Pos2, _ctx: &ToolContext<'_>) -> ToolResult {
        Ok(None)
    }

    fn preview(&self) -> Option<&ElementType> {
        self.hover.as_ref()
    }

    fn current_state_name(&self) -> &'static str {
        if self.hover.is_some() { "Previewing" } else { "Idle" }
    }
}

pub fn new_switch_tool() -> AttachmentTool {
    AttachmentTool::new(AttachmentKind::Switch)
}

pub fn new_outlet_tool() -> AttachmentTool {
    AttachmentTool::new(AttachmentKind::Outlet)
}
