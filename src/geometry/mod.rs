//! Pure geometry used by the tools: segments, projection, grid and
//! orthogonal snapping, and the nearest-wall query used to place attachments.

pub mod hit_testing;
pub mod snapping;

use egui::{Pos2, Vec2};
use serde::{Deserialize, Serialize};

pub use hit_testing::distance_to_segment;
pub use snapping::{apply_orthogonal, nearest_wall, nearest_wall_within, snap_to_grid, WallProjection};

/// An ordered pair of points. Zero-length segments are legal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub start: Pos2,
    pub end: Pos2,
}

impl Segment {
    pub fn new(start: Pos2, end: Pos2) -> Self {
        Self { start, end }
    }

    pub fn delta(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn length(&self) -> f32 {
        self.delta().length()
    }

    pub fn is_degenerate(&self) -> bool {
        self.delta().length_sq() == 0.0
    }

    /// Direction of the segment in radians, measured in scene coordinates
    /// (y grows downwards, so positive angles turn clockwise on screen).
    /// A degenerate segment has angle 0.
    pub fn angle(&self) -> f32 {
        if self.is_degenerate() {
            0.0
        } else {
            self.delta().angle()
        }
    }

    pub fn midpoint(&self) -> Pos2 {
        self.start + self.delta() * 0.5
    }

    /// Closest point on the closed segment to `p`.
    pub fn project(&self, p: Pos2) -> Pos2 {
        project_point_onto_segment(p, self)
    }
}

/// Parametric projection of `p` onto `segment`, with `t` clamped to `[0, 1]`.
///
/// A zero-length segment has no direction, so its start point is returned.
pub fn project_point_onto_segment(p: Pos2, segment: &Segment) -> Pos2 {
    let d = segment.delta();
    let len_sq = d.length_sq();
    if len_sq == 0.0 {
        return segment.start;
    }

    let t = ((p - segment.start).dot(d) / len_sq).clamp(0.0, 1.0);
    segment.start + d * t
}

/// Rotate a local offset by `angle` radians and translate it to `origin`.
pub fn rotate_about(origin: Pos2, local: Vec2, angle: f32) -> Pos2 {
    let (sin, cos) = angle.sin_cos();
    origin + Vec2::new(local.x * cos - local.y * sin, local.x * sin + local.y * cos)
}
