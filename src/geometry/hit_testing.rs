use egui::{Pos2, Rect};

use super::{project_point_onto_segment, Segment};

/// Distance from a point to the closest point of a line segment
pub fn distance_to_segment(point: Pos2, segment: &Segment) -> f32 {
    point.distance(project_point_onto_segment(point, segment))
}

/// True if `point` lies within `tolerance` of the segment
pub fn near_segment(point: Pos2, segment: &Segment, tolerance: f32) -> bool {
    distance_to_segment(point, segment) <= tolerance
}

/// True if `point` lies inside `rect` grown by `tolerance` on every side.
/// Works for zero-size rectangles too.
pub fn in_expanded_rect(point: Pos2, rect: Rect, tolerance: f32) -> bool {
    rect.expand(tolerance).contains(point)
}

/// True if `point` is within `tolerance` of the circle outline or inside it
pub fn in_circle(point: Pos2, center: Pos2, radius: f32, tolerance: f32) -> bool {
    point.distance(center) <= radius + tolerance
}
