use egui::epaint::{CircleShape, TextShape};
use egui::{Color32, FontId, Painter, Pos2, Rect, Shape, Stroke};

use crate::element::{Element, ElementStyle, ElementType, RenderPrimitive};
use crate::geometry::rotate_about;
use crate::input::CanvasView;

const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;
const ARC_SEGMENTS: usize = 32;
const LABEL_FONT_SIZE: f32 = 12.0;
/// Grid lines closer than this on screen are not drawn
const MIN_GRID_SPACING: f32 = 4.0;

/// Paints the scene, the grid and tool previews onto an egui painter.
///
/// Geometry is transformed by the view; stroke widths and label sizes are
/// not, so lines keep their thickness at any zoom.
#[derive(Debug, Clone)]
pub struct Renderer {
    background: Color32,
    grid_stroke: Stroke,
    label_color: Color32,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            background: Color32::WHITE,
            grid_stroke: Stroke::new(1.0, Color32::from_gray(225)),
            label_color: Color32::from_gray(40),
        }
    }

    /// Renders the current frame
    pub fn render(
        &self,
        painter: &Painter,
        rect: Rect,
        view: &CanvasView,
        elements: &[&ElementType],
        preview: Option<&ElementType>,
        grid_size: f32,
    ) {
        painter.rect_filled(rect, 0.0, self.background);
        for line in self.grid_lines(rect, view, grid_size) {
            painter.line_segment(line, self.grid_stroke);
        }
        for element in elements {
            self.draw_element(painter, view, element);
        }
        if let Some(preview) = preview {
            self.draw_element(painter, view, preview);
        }
    }

    pub fn draw_element(&self, painter: &Painter, view: &CanvasView, element: &ElementType) {
        let style = element.style();
        for primitive in element.render_geometry().primitives {
            match &primitive {
                RenderPrimitive::Label { text, anchor, angle } => {
                    self.draw_label(painter, view.scene_to_screen(*anchor), text, *angle)
                }
                _ => {
                    painter.extend(primitive_shapes(&primitive, style, view));
                }
            }
        }
    }

    fn draw_label(&self, painter: &Painter, anchor: Pos2, text: &str, angle: f32) {
        let galley = painter.layout_no_wrap(text.to_owned(), FontId::proportional(LABEL_FONT_SIZE), self.label_color);
        // Text rotates around its top-left corner, so shift it to center on the anchor
        let pos = rotate_about(anchor, -galley.size() / 2.0, angle);
        painter.add(TextShape::new(pos, galley, self.label_color).with_angle(angle));
    }

    /// Screen-space grid lines covering `rect`
    pub fn grid_lines(&self, rect: Rect, view: &CanvasView, grid_size: f32) -> Vec<[Pos2; 2]> {
        if !(grid_size.is_finite() && grid_size > 0.0) || grid_size * view.zoom < MIN_GRID_SPACING {
            return Vec::new();
        }

        let min = view.screen_to_scene(rect.min);
        let max = view.screen_to_scene(rect.max);
        let mut lines = Vec::new();

        for i in line_indices(min.x, max.x, grid_size) {
            let sx = view.scene_to_screen(Pos2::new(i as f32 * grid_size, 0.0)).x;
            lines.push([Pos2::new(sx, rect.top()), Pos2::new(sx, rect.bottom())]);
        }
        for i in line_indices(min.y, max.y, grid_size) {
            let sy = view.scene_to_screen(Pos2::new(0.0, i as f32 * grid_size)).y;
            lines.push([Pos2::new(rect.left(), sy), Pos2::new(rect.right(), sy)]);
        }
        lines
    }
}

/// Indices of the grid lines covering `min..=max`
fn line_indices(min: f32, max: f32, grid_size: f32) -> std::ops::RangeInclusive<i64> {
    (min / grid_size).floor() as i64..=(max / grid_size).floor() as i64
}

/// Screen-space shapes for one non-text primitive
pub fn primitive_shapes(primitive: &RenderPrimitive, style: &ElementStyle, view: &CanvasView) -> Vec<Shape> {
    let to_screen = |points: Vec<Pos2>| -> Vec<Pos2> { points.into_iter().map(|p| view.scene_to_screen(p)).collect() };

    match primitive {
        RenderPrimitive::OrientedRect {
            origin,
            length,
            thickness,
            angle,
        } => {
            let corners = RenderPrimitive::oriented_rect_corners(*origin, *length, *thickness, *angle);
            outline(to_screen(corners.to_vec()), true, style)
        }
        RenderPrimitive::Polyline { points, closed } => outline(to_screen(points.clone()), *closed, style),
        RenderPrimitive::Arc {
            center,
            radius,
            start_angle,
            sweep,
        } => {
            let points = RenderPrimitive::arc_points(*center, *radius, *start_angle, *sweep, ARC_SEGMENTS);
            stroke_path(to_screen(points), false, style)
        }
        RenderPrimitive::Circle { center, radius } => {
            let center = view.scene_to_screen(*center);
            let radius = radius * view.zoom;
            if style.dashed {
                let points = RenderPrimitive::arc_points(center, radius, 0.0, std::f32::consts::TAU, ARC_SEGMENTS);
                let mut shapes = vec![Shape::circle_filled(center, radius, style.fill)];
                shapes.extend(stroke_path(points, false, style));
                shapes
            } else {
                vec![Shape::Circle(CircleShape {
                    center,
                    radius,
                    fill: style.fill,
                    stroke: style.stroke,
                })]
            }
        }
        RenderPrimitive::Rect(rect) => {
            let corners = vec![rect.left_top(), rect.right_top(), rect.right_bottom(), rect.left_bottom()];
            outline(to_screen(corners), true, style)
        }
        RenderPrimitive::Label { .. } => Vec::new(),
    }
}

/// Filled outline; the fill is skipped for open paths and transparent styles
fn outline(points: Vec<Pos2>, closed: bool, style: &ElementStyle) -> Vec<Shape> {
    let mut shapes = Vec::new();
    if closed && style.fill != Color32::TRANSPARENT {
        shapes.push(Shape::convex_polygon(points.clone(), style.fill, Stroke::NONE));
    }
    shapes.extend(stroke_path(points, closed, style));
    shapes
}

fn stroke_path(mut points: Vec<Pos2>, closed: bool, style: &ElementStyle) -> Vec<Shape> {
    if style.dashed {
        if closed {
            if let Some(first) = points.first().copied() {
                points.push(first);
            }
        }
        Shape::dashed_line(&points, style.stroke, DASH_LENGTH, GAP_LENGTH)
    } else if closed {
        vec![Shape::closed_line(points, style.stroke)]
    } else {
        vec![Shape::line(points, style.stroke)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use egui::{pos2, vec2};

    fn canvas() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0))
    }

    #[test]
    fn test_grid_lines_cover_canvas() {
        let renderer = Renderer::new();
        let lines = renderer.grid_lines(canvas(), &CanvasView::default(), 25.0);
        // 0, 25, 50, 75, 100 in each direction
        assert_eq!(lines.len(), 10);
    }

    #[test]
    fn test_grid_skipped_when_too_dense() {
        let renderer = Renderer::new();
        let view = CanvasView::new(vec2(0.0, 0.0), 0.1);
        assert!(renderer.grid_lines(canvas(), &view, 25.0).is_empty());
        assert!(renderer.grid_lines(canvas(), &CanvasView::default(), 0.0).is_empty());
    }

    #[test]
    fn test_grid_far_from_origin_terminates() {
        let renderer = Renderer::new();
        let view = CanvasView::new(vec2(-1.0e9, -1.0e9), 1.0);
        let lines = renderer.grid_lines(canvas(), &view, 25.0);
        assert!(!lines.is_empty());
        assert!(lines.len() <= 24);
    }

    #[test]
    fn test_circle_is_filled_and_stroked() {
        let circle = factory::create_circle(pos2(10.0, 10.0), 5.0);
        let view = CanvasView::new(vec2(0.0, 0.0), 2.0);
        let geometry = circle.render_geometry();
        let shapes = primitive_shapes(&geometry.primitives[0], circle.style(), &view);

        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Circle(shape) => {
                assert_eq!(shape.center, pos2(20.0, 20.0));
                assert_eq!(shape.radius, 10.0);
                assert_eq!(shape.stroke, circle.style().stroke);
            }
            other => panic!("expected a circle, got {:?}", other),
        }
    }

    #[test]
    fn test_stroke_width_ignores_zoom() {
        let line = factory::create_line(pos2(0.0, 0.0), pos2(10.0, 0.0));
        let view = CanvasView::new(vec2(0.0, 0.0), 4.0);
        let geometry = line.render_geometry();
        let shapes = primitive_shapes(&geometry.primitives[0], line.style(), &view);

        assert_eq!(shapes.len(), 1);
        match &shapes[0] {
            Shape::Path(path) => {
                assert_eq!(path.points, vec![pos2(0.0, 0.0), pos2(40.0, 0.0)]);
                assert_eq!(path.stroke.width, line.style().stroke.width);
            }
            other => panic!("expected a path, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_is_dashed() {
        let mut line = factory::create_line(pos2(0.0, 0.0), pos2(100.0, 0.0));
        line.set_style(line.style().as_preview());
        let geometry = line.render_geometry();
        let shapes = primitive_shapes(&geometry.primitives[0], line.style(), &CanvasView::default());
        assert!(shapes.len() > 1);
    }

    #[test]
    fn test_render_scene_in_frame() {
        let renderer = Renderer::new();
        let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
        let door = factory::create_door(pos2(0.0, 50.0), pos2(30.0, 50.0), 8.0);
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            let painter = ctx.layer_painter(egui::LayerId::background());
            renderer.render(&painter, canvas(), &CanvasView::default(), &[&wall, &door], None, 25.0);
        });
    }
}
