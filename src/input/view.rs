use egui::{Pos2, Vec2};

const MIN_ZOOM: f32 = 0.05;
const MAX_ZOOM: f32 = 20.0;

/// Pan and zoom of the canvas: `screen = scene * zoom + offset`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasView {
    pub offset: Vec2,
    pub zoom: f32,
}

impl Default for CanvasView {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            zoom: 1.0,
        }
    }
}

impl CanvasView {
    pub fn new(offset: Vec2, zoom: f32) -> Self {
        Self {
            offset,
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    pub fn screen_to_scene(&self, screen: Pos2) -> Pos2 {
        ((screen.to_vec2() - self.offset) / self.zoom).to_pos2()
    }

    pub fn scene_to_screen(&self, scene: Pos2) -> Pos2 {
        (scene.to_vec2() * self.zoom + self.offset).to_pos2()
    }

    /// Scale by `factor`, keeping the scene point under `screen` in place
    pub fn zoom_at(&mut self, screen: Pos2, factor: f32) {
        let anchor = self.screen_to_scene(screen);
        self.zoom = (self.zoom * factor).clamp(MIN_ZOOM, MAX_ZOOM);
        self.offset = screen.to_vec2() - anchor.to_vec2() * self.zoom;
    }

    pub fn pan(&mut self, delta: Vec2) {
        self.offset += delta;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{pos2, vec2};

    #[test]
    fn test_round_trip_through_screen() {
        let view = CanvasView::new(vec2(100.0, 50.0), 2.0);
        let screen = view.scene_to_screen(pos2(10.0, -5.0));
        assert_eq!(screen, pos2(120.0, 40.0));
        assert_eq!(view.screen_to_scene(screen), pos2(10.0, -5.0));
    }

    #[test]
    fn test_zoom_keeps_anchor_fixed() {
        let mut view = CanvasView::new(vec2(30.0, 40.0), 1.0);
        let cursor = pos2(200.0, 150.0);
        let before = view.screen_to_scene(cursor);
        view.zoom_at(cursor, 1.15);
        let after = view.screen_to_scene(cursor);
        assert!((before - after).length() < 1e-3);
        assert!((view.zoom - 1.15).abs() < 1e-6);
    }
}
