use egui::{Color32, Stroke};
use serde::{Deserialize, Serialize};

// Common constants for all element types
pub const DEFAULT_WALL_THICKNESS: f32 = 24.0;
pub const DEFAULT_DOOR_WIDTH: f32 = 8.0;
pub const DEFAULT_ATTACHMENT_SIZE: f32 = 12.0;

/// Shortest length used when deriving the rectangle of a wall-type element
pub const MIN_SEGMENT_LENGTH: f32 = 1.0;

/// Offset of the dimension labels of generic shapes from their anchor point
pub const LABEL_OFFSET: f32 = 5.0;

pub const HIGHLIGHT_COLOR: Color32 = Color32::from_rgb(255, 120, 0);
pub const HIGHLIGHT_MIN_WIDTH: f32 = 2.0;

pub const PREVIEW_COLOR: Color32 = Color32::from_rgb(0, 120, 215);

/// Draw order of each element family, higher values paint on top
pub mod draw_order {
    pub const SHAPE: i32 = 0;
    pub const WALL: i32 = 1;
    pub const WINDOW: i32 = 4;
    pub const DOOR: i32 = 5;
    pub const ATTACHMENT: i32 = 6;
}

/// Presentation state of an element.
///
/// The selection manager swaps this for a highlighted copy and puts the
/// original back on deselect, so it must round-trip exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElementStyle {
    pub stroke: Stroke,
    pub fill: Color32,
    pub dashed: bool,
}

impl ElementStyle {
    pub const fn new(width: f32, color: Color32, fill: Color32) -> Self {
        Self {
            stroke: Stroke { width, color },
            fill,
            dashed: false,
        }
    }

    pub fn wall() -> Self {
        Self::new(2.0, Color32::from_rgb(0, 90, 180), Color32::from_rgba_unmultiplied(80, 130, 220, 120))
    }

    pub fn window() -> Self {
        Self::new(2.0, Color32::from_rgb(220, 60, 60), Color32::TRANSPARENT)
    }

    pub fn door() -> Self {
        Self::new(2.0, Color32::from_rgb(120, 120, 120), Color32::TRANSPARENT)
    }

    pub fn attachment() -> Self {
        Self::new(2.0, Color32::from_rgb(200, 40, 40), Color32::TRANSPARENT)
    }

    pub fn line() -> Self {
        Self::new(1.5, Color32::BLACK, Color32::TRANSPARENT)
    }

    pub fn rectangle() -> Self {
        Self::new(1.5, Color32::BLACK, Color32::from_rgba_unmultiplied(200, 200, 255, 80))
    }

    pub fn circle() -> Self {
        Self::new(1.5, Color32::BLACK, Color32::from_rgba_unmultiplied(200, 255, 200, 80))
    }

    /// Dashed outline used while a gesture is still in progress
    pub fn as_preview(self) -> Self {
        Self { dashed: true, ..self }
    }

    /// Preview look of the generic shapes, which switch to the accent color
    pub fn shape_preview(self) -> Self {
        Self {
            stroke: Stroke::new(1.0, PREVIEW_COLOR),
            fill: if self.fill == Color32::TRANSPARENT {
                Color32::TRANSPARENT
            } else {
                Color32::from_rgba_unmultiplied(0, 120, 215, 40)
            },
            dashed: true,
        }
    }

    pub fn highlighted(self) -> Self {
        Self {
            stroke: Stroke::new(self.stroke.width.max(HIGHLIGHT_MIN_WIDTH), HIGHLIGHT_COLOR),
            ..self
        }
    }
}
