use egui::Pos2;
use log::debug;

use crate::element::{Element, Wall};
use crate::id_generator::ElementId;

/// Round each coordinate to the nearest multiple of `grid_size`.
///
/// Ties round half away from zero (`f32::round`). A grid size that is not a
/// positive finite number disables snapping.
pub fn snap_to_grid(p: Pos2, grid_size: f32) -> Pos2 {
    if !(grid_size.is_finite() && grid_size > 0.0) {
        return p;
    }
    Pos2::new(
        (p.x / grid_size).round() * grid_size,
        (p.y / grid_size).round() * grid_size,
    )
}

/// Force the segment `origin -> p` onto the dominant axis.
///
/// |dx| >= |dy| keeps the segment horizontal, otherwise it becomes vertical.
pub fn apply_orthogonal(p: Pos2, origin: Option<Pos2>, active: bool) -> Pos2 {
    let Some(origin) = origin else {
        return p;
    };
    if !active {
        return p;
    }

    let dx = (p.x - origin.x).abs();
    let dy = (p.y - origin.y).abs();
    if dx >= dy {
        Pos2::new(p.x, origin.y)
    } else {
        Pos2::new(origin.x, p.y)
    }
}

/// Result of projecting a point onto the closest wall centerline.
///
/// Refers to the wall by identity only; the scene keeps ownership.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallProjection {
    pub wall_id: ElementId,
    /// Closest point on the wall centerline
    pub point: Pos2,
    /// Rotation of the wall in radians
    pub angle: f32,
    /// Distance from the query point to `point`
    pub distance: f32,
}

/// Find the wall whose centerline passes closest to `p`.
///
/// Ties keep the first wall in iteration order.
pub fn nearest_wall<'a, I>(p: Pos2, walls: I) -> Option<WallProjection>
where
    I: IntoIterator<Item = &'a Wall>,
{
    let mut best: Option<WallProjection> = None;
    for wall in walls {
        let point = wall.project_point(p);
        let distance = p.distance(point);
        if best.is_none_or(|b| distance < b.distance) {
            best = Some(WallProjection {
                wall_id: wall.id(),
                point,
                angle: wall.centerline().angle(),
                distance,
            });
        }
    }
    best
}

/// Like [`nearest_wall`], but rejects a hit further than `max_distance` away.
pub fn nearest_wall_within<'a, I>(p: Pos2, walls: I, max_distance: f32) -> Option<WallProjection>
where
    I: IntoIterator<Item = &'a Wall>,
{
    let hit = nearest_wall(p, walls)?;
    if hit.distance <= max_distance {
        Some(hit)
    } else {
        debug!(
            "Nearest wall {} is {:.2} away, beyond snap range {:.2}",
            hit.wall_id, hit.distance, max_distance
        );
        None
    }
}
