use egui::{vec2, Pos2, Rect};

use crate::geometry::rotate_about;

/// One drawable piece of an element, in scene coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderPrimitive {
    /// A `length` x `thickness` rectangle centered on the segment that starts at
    /// `origin` and points along `angle`.
    OrientedRect {
        origin: Pos2,
        length: f32,
        thickness: f32,
        angle: f32,
    },
    Polyline {
        points: Vec<Pos2>,
        closed: bool,
    },
    /// Circular arc from `start_angle` sweeping by `sweep` radians.
    Arc {
        center: Pos2,
        radius: f32,
        start_angle: f32,
        sweep: f32,
    },
    Circle {
        center: Pos2,
        radius: f32,
    },
    Rect(Rect),
    /// Text placed at `anchor`, rotated by `angle` around its own center.
    Label {
        text: String,
        anchor: Pos2,
        angle: f32,
    },
}

impl RenderPrimitive {
    /// Corners of an oriented rectangle, in drawing order.
    pub fn oriented_rect_corners(origin: Pos2, length: f32, thickness: f32, angle: f32) -> [Pos2; 4] {
        let half = thickness / 2.0;
        [
            rotate_about(origin, vec2(0.0, -half), angle),
            rotate_about(origin, vec2(length, -half), angle),
            rotate_about(origin, vec2(length, half), angle),
            rotate_about(origin, vec2(0.0, half), angle),
        ]
    }

    /// Flatten an arc into `segments` straight pieces.
    pub fn arc_points(center: Pos2, radius: f32, start_angle: f32, sweep: f32, segments: usize) -> Vec<Pos2> {
        let segments = segments.max(1);
        (0..=segments)
            .map(|i| {
                let a = start_angle + sweep * (i as f32 / segments as f32);
                center + vec2(a.cos(), a.sin()) * radius
            })
            .collect()
    }
}

/// Derived description of an element consumed by the renderer.
///
/// Always recomputed from the element's defining geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderGeometry {
    pub primitives: Vec<RenderPrimitive>,
    pub draw_order: i32,
}

impl RenderGeometry {
    pub fn new(draw_order: i32) -> Self {
        Self {
            primitives: Vec::new(),
            draw_order,
        }
    }

    pub fn with(mut self, primitive: RenderPrimitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    /// Text of the first label, if the element carries one
    pub fn label(&self) -> Option<&str> {
        self.primitives.iter().find_map(|p| match p {
            RenderPrimitive::Label { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn label_angle(&self) -> Option<f32> {
        self.primitives.iter().find_map(|p| match p {
            RenderPrimitive::Label { angle, .. } => Some(*angle),
            _ => None,
        })
    }
}
