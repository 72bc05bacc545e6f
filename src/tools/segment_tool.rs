use egui::Pos2;
use log::{debug, info};

use super::{GestureState, Tool, ToolContext, ToolError, ToolResult};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::{factory, Element, ElementType};
use crate::geometry::apply_orthogonal;

/// Which element a two-point drag produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Wall,
    Window,
    Door,
    Line,
}

impl SegmentKind {
    fn tool_name(self) -> &'static str {
        match self {
            SegmentKind::Wall => "WALL",
            SegmentKind::Window => "WINDOW",
            SegmentKind::Door => "DOOR",
            SegmentKind::Line => "LINE",
        }
    }

    fn create(self, start: Pos2, end: Pos2, config: &EditorConfig) -> ElementType {
        match self {
            SegmentKind::Wall => factory::create_wall(start, end, config.wall_thickness),
            SegmentKind::Window => factory::create_window(start, end, config.window_thickness()),
            SegmentKind::Door => factory::create_door(start, end, config.door_width),
            SegmentKind::Line => factory::create_line(start, end),
        }
    }

    fn create_preview(self, start: Pos2, end: Pos2, config: &EditorConfig) -> ElementType {
        let mut preview = self.create(start, end, config);
        let style = match self {
            SegmentKind::Line => preview.style().shape_preview(),
            _ => preview.style().as_preview(),
        };
        preview.set_style(style);
        preview
    }
}

/// Press-drag-release tool for everything defined by two endpoints.
///
/// The end point follows the orthogonal constraint relative to the anchor.
#[derive(Debug, Clone)]
pub struct SegmentTool {
    kind: SegmentKind,
    state: GestureState,
}

impl SegmentTool {
    pub fn new(kind: SegmentKind) -> Self {
        Self {
            kind,
            state: GestureState::Idle,
        }
    }

    pub fn kind(&self) -> SegmentKind {
        self.kind
    }
}

impl Tool for SegmentTool {
    fn name(&self) -> &'static str {
        self.kind.tool_name()
    }

    fn cancel(&mut self) {
        if matches!(self.state, GestureState::Previewing { .. }) {
            debug!("{}: gesture cancelled", self.name());
        }
        self.state = GestureState::Idle;
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        self.state = GestureState::Previewing {
            anchor: pos,
            preview: self.kind.create_preview(pos, pos, ctx.config),
        };
        debug!("{}: Idle -> Previewing at {:?}", self.name(), pos);
        Ok(None)
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        if let GestureState::Previewing { anchor, preview } = &mut self.state {
            let end = apply_orthogonal(pos, Some(*anchor), ctx.ortho);
            preview.set_endpoints(*anchor, end).map_err(ToolError::Geometry)?;
        }
        Ok(None)
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        let GestureState::Previewing { anchor, .. } = std::mem::take(&mut self.state) else {
            return Ok(None);
        };

        let end = apply_orthogonal(pos, Some(anchor), ctx.ortho);
        let element = self.kind.create(anchor, end, ctx.config);
        info!("{}: committing {:?} -> {:?}", self.name(), anchor, end);
        Ok(Some(Command::insert(element)))
    }

    fn preview(&self) -> Option<&ElementType> {
        self.state.preview()
    }

    fn current_state_name(&self) -> &'static str {
        self.state.name()
    }
}

pub fn new_wall_tool() -> SegmentTool {
    SegmentTool::new(SegmentKind::Wall)
}

pub fn new_window_tool() -> SegmentTool {
    SegmentTool::new(SegmentKind::Window)
}

pub fn new_door_tool() -> SegmentTool {
    SegmentTool::new(SegmentKind::Door)
}

pub fn new_line_tool() -> SegmentTool {
    SegmentTool::new(SegmentKind::Line)
}
