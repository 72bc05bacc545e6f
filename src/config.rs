use serde::{Deserialize, Serialize};

use crate::element::common::{DEFAULT_ATTACHMENT_SIZE, DEFAULT_DOOR_WIDTH, DEFAULT_WALL_THICKNESS};

/// Storage key for the persisted editor settings
pub const CONFIG_KEY: &str = "floorplan_editor_config";

/// Tunable editor settings, persisted by the shell between runs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Grid spacing in scene units
    pub grid_size: f32,
    pub wall_thickness: f32,
    /// Window thickness as a fraction of the wall thickness
    pub window_thickness_ratio: f32,
    pub door_width: f32,
    pub attachment_size: f32,
    /// How far from a wall centerline an attachment may still snap to it
    pub attachment_snap_range: f32,
    pub snap_to_grid: bool,
    pub zoom_factor: f32,
    /// Pick radius for selection hit-tests, in scene units
    pub hit_tolerance: f32,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            grid_size: 25.0,
            wall_thickness: DEFAULT_WALL_THICKNESS,
            window_thickness_ratio: 0.5,
            door_width: DEFAULT_DOOR_WIDTH,
            attachment_size: DEFAULT_ATTACHMENT_SIZE,
            attachment_snap_range: 30.0,
            snap_to_grid: true,
            zoom_factor: 1.15,
            hit_tolerance: 4.0,
        }
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

impl EditorConfig {
    /// Replace unusable values, e.g. from a hand-edited or stale store
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        Self {
            grid_size: positive_or(self.grid_size, defaults.grid_size),
            wall_thickness: positive_or(self.wall_thickness, defaults.wall_thickness),
            window_thickness_ratio: positive_or(self.window_thickness_ratio, defaults.window_thickness_ratio),
            door_width: positive_or(self.door_width, defaults.door_width),
            attachment_size: positive_or(self.attachment_size, defaults.attachment_size),
            attachment_snap_range: positive_or(self.attachment_snap_range, defaults.attachment_snap_range),
            snap_to_grid: self.snap_to_grid,
            zoom_factor: if self.zoom_factor.is_finite() && self.zoom_factor > 1.0 {
                self.zoom_factor
            } else {
                defaults.zoom_factor
            },
            hit_tolerance: if self.hit_tolerance.is_finite() && self.hit_tolerance >= 0.0 {
                self.hit_tolerance
            } else {
                defaults.hit_tolerance
            },
        }
    }

    pub fn window_thickness(&self) -> f32 {
        self.wall_thickness * self.window_thickness_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.grid_size, 25.0);
        assert_eq!(config.wall_thickness, 24.0);
        assert!((config.window_thickness() - 12.0).abs() < 1e-6);
        assert!(config.snap_to_grid);
    }

    #[test]
    fn test_sanitized_replaces_bad_values() {
        let config = EditorConfig {
            grid_size: 0.0,
            wall_thickness: f32::NAN,
            zoom_factor: 0.5,
            hit_tolerance: -1.0,
            door_width: 10.0,
            ..EditorConfig::default()
        }
        .sanitized();

        assert_eq!(config.grid_size, 25.0);
        assert_eq!(config.wall_thickness, 24.0);
        assert_eq!(config.zoom_factor, 1.15);
        assert_eq!(config.hit_tolerance, 4.0);
        assert_eq!(config.door_width, 10.0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config: EditorConfig = serde_json::from_str(r#"{"grid_size": 50.0}"#).unwrap();
        assert_eq!(config.grid_size, 50.0);
        assert_eq!(config.attachment_snap_range, 30.0);
    }
}
