use egui::Pos2;
use thiserror::Error;

use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::ElementType;
use crate::scene::Scene;

mod attachment_tool;
mod circle_tool;
mod rectangle_tool;
mod segment_tool;

pub use attachment_tool::{new_outlet_tool, new_switch_tool, AttachmentTool};
pub use circle_tool::{new_circle_tool, CircleTool};
pub use rectangle_tool::{new_rectangle_tool, RectangleTool};
pub use segment_tool::{new_door_tool, new_line_tool, new_wall_tool, new_window_tool, SegmentKind, SegmentTool};

/// Names accepted by [`new_tool`], in toolbar order
pub const TOOL_NAMES: [&str; 8] = ["WALL", "WINDOW", "DOOR", "SWITCH", "OUTLET", "LINE", "RECTANGLE", "CIRCLE"];

/// Outcome of a pointer event: maybe a command to record
pub type ToolResult = Result<Option<Command>, ToolError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ToolError {
    #[error("no wall within {range:.0} units")]
    NoTarget { range: f32 },
    #[error("invalid geometry: {0}")]
    Geometry(String),
}

/// How the dispatcher prepares pointer positions before a tool sees them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    /// Positions are snapped to the grid (when snapping is on)
    GridSnapped,
    /// Positions are passed through; the tool places things itself
    Free,
}

/// Read-only view of the session a tool gets for each event
#[derive(Debug, Clone, Copy)]
pub struct ToolContext<'a> {
    pub scene: &'a Scene,
    pub config: &'a EditorConfig,
    /// Orthogonal constraint (Shift) held
    pub ortho: bool,
}

/// Gesture state shared by the drag tools
#[derive(Debug, Clone, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Previewing {
        anchor: Pos2,
        preview: ElementType,
    },
}

impl GestureState {
    pub fn name(&self) -> &'static str {
        match self {
            GestureState::Idle => "Idle",
            GestureState::Previewing { .. } => "Previewing",
        }
    }

    pub fn preview(&self) -> Option<&ElementType> {
        match self {
            GestureState::Idle => None,
            GestureState::Previewing { preview, .. } => Some(preview),
        }
    }
}

/// Tool trait defines the interface for all drawing tools
pub trait Tool: Send + Sync {
    /// Return the name of the tool
    fn name(&self) -> &'static str;

    fn positioning(&self) -> Positioning {
        Positioning::GridSnapped
    }

    /// Called when the tool becomes active. Drops any stale preview.
    fn activate(&mut self) {
        self.cancel();
    }

    /// Called when another tool takes over or the editor closes
    fn deactivate(&mut self) {
        self.cancel();
    }

    /// Discard the in-flight gesture without touching the scene
    fn cancel(&mut self);

    /// Handle pointer press on the canvas
    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult;

    /// Handle pointer movement, with or without a held button
    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult;

    /// Handle pointer release. Returns the commit command when a gesture ends.
    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult;

    /// Element the renderer should draw for the gesture in progress
    fn preview(&self) -> Option<&ElementType>;

    fn current_state_name(&self) -> &'static str;
}

/// Enum representing all available tool types
#[derive(Debug, Clone)]
pub enum ToolType {
    Segment(SegmentTool),
    Rectangle(RectangleTool),
    Circle(CircleTool),
    Attachment(AttachmentTool),
}

impl Tool for ToolType {
    fn name(&self) -> &'static str {
        match self {
            Self::Segment(tool) => tool.name(),
            Self::Rectangle(tool) => tool.name(),
            Self::Circle(tool) => tool.name(),
            Self::Attachment(tool) => tool.name(),
        }
    }

    fn positioning(&self) -> Positioning {
        match self {
            Self::Segment(tool) => tool.positioning(),
            Self::Rectangle(tool) => tool.positioning(),
            Self::Circle(tool) => tool.positioning(),
            Self::Attachment(tool) => tool.positioning(),
        }
    }

    fn activate(&mut self) {
        match self {
            Self::Segment(tool) => tool.activate(),
            Self::Rectangle(tool) => tool.activate(),
            Self::Circle(tool) => tool.activate(),
            Self::Attachment(tool) => tool.activate(),
        }
    }

    fn deactivate(&mut self) {
        match self {
            Self::Segment(tool) => tool.deactivate(),
            Self::Rectangle(tool) => tool.deactivate(),
            Self::Circle(tool) => tool.deactivate(),
            Self::Attachment(tool) => tool.deactivate(),
        }
    }

    fn cancel(&mut self) {
        match self {
            Self::Segment(tool) => tool.cancel(),
            Self::Rectangle(tool) => tool.cancel(),
            Self::Circle(tool) => tool.cancel(),
            Self::Attachment(tool) => tool.cancel(),
        }
    }

    fn on_pointer_down(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        match self {
            Self::Segment(tool) => tool.on_pointer_down(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_down(pos, ctx),
            Self::Circle(tool) => tool.on_pointer_down(pos, ctx),
            Self::Attachment(tool) => tool.on_pointer_down(pos, ctx),
        }
    }

    fn on_pointer_move(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        match self {
            Self::Segment(tool) => tool.on_pointer_move(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_move(pos, ctx),
            Self::Circle(tool) => tool.on_pointer_move(pos, ctx),
            Self::Attachment(tool) => tool.on_pointer_move(pos, ctx),
        }
    }

    fn on_pointer_up(&mut self, pos: Pos2, ctx: &ToolContext<'_>) -> ToolResult {
        match self {
            Self::Segment(tool) => tool.on_pointer_up(pos, ctx),
            Self::Rectangle(tool) => tool.on_pointer_up(pos, ctx),
            Self::Circle(tool) => tool.on_pointer_up(pos, ctx),
            Self::Attachment(tool) => tool.on_pointer_up(pos, ctx),
        }
    }

    fn preview(&self) -> Option<&ElementType> {
        match self {
            Self::Segment(tool) => tool.preview(),
            Self::Rectangle(tool) => tool.preview(),
            Self::Circle(tool) => tool.preview(),
            Self::Attachment(tool) => tool.preview(),
        }
    }

    fn current_state_name(&self) -> &'static str {
        match self {
            Self::Segment(tool) => tool.current_state_name(),
            Self::Rectangle(tool) => tool.current_state_name(),
            Self::Circle(tool) => tool.current_state_name(),
            Self::Attachment(tool) => tool.current_state_name(),
        }
    }
}

/// Factory function to create a new tool from its command-line name.
///
/// Matching ignores surrounding whitespace and case.
pub fn new_tool(name: &str) -> Option<ToolType> {
    match name.trim().to_ascii_uppercase().as_str() {
        "WALL" => Some(ToolType::Segment(new_wall_tool())),
        "WINDOW" => Some(ToolType::Segment(new_window_tool())),
        "DOOR" => Some(ToolType::Segment(new_door_tool())),
        "LINE" => Some(ToolType::Segment(new_line_tool())),
        "SWITCH" => Some(ToolType::Attachment(new_switch_tool())),
        "OUTLET" => Some(ToolType::Attachment(new_outlet_tool())),
        "RECTANGLE" => Some(ToolType::Rectangle(new_rectangle_tool())),
        "CIRCLE" => Some(ToolType::Circle(new_circle_tool())),
        _ => None,
    }
}
