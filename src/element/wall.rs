use egui::{vec2, Pos2};
use serde::{Deserialize, Serialize};

use super::common::{draw_order, ElementStyle, MIN_SEGMENT_LENGTH};
use super::render_geometry::{RenderGeometry, RenderPrimitive};
use super::{Element, ElementKind};
use crate::geometry::{hit_testing, rotate_about, Segment};
use crate::id_generator::ElementId;

/// Wall defined by its centerline and a thickness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wall {
    id: ElementId,
    start: Pos2,
    end: Pos2,
    thickness: f32,
    style: ElementStyle,
}

impl Wall {
    pub(crate) fn new(id: ElementId, start: Pos2, end: Pos2, thickness: f32) -> Self {
        Self {
            id,
            start,
            end,
            thickness,
            style: ElementStyle::wall(),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn centerline(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    /// Closest point on the centerline
    pub fn project_point(&self, pos: Pos2) -> Pos2 {
        self.centerline().project(pos)
    }

    pub(crate) fn set_endpoints(&mut self, start: Pos2, end: Pos2) {
        self.start = start;
        self.end = end;
    }
}

impl Element for Wall {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Wall
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        let line = self.centerline();
        let length = line.length().max(MIN_SEGMENT_LENGTH);
        let angle = line.angle();

        // The label turns with the wall so it reads along the centerline
        RenderGeometry::new(draw_order::WALL)
            .with(RenderPrimitive::OrientedRect {
                origin: self.start,
                length,
                thickness: self.thickness,
                angle,
            })
            .with(RenderPrimitive::Label {
                text: format!("{:.2}", line.length()),
                anchor: rotate_about(self.start, vec2(length / 2.0, 0.0), angle),
                angle,
            })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::near_segment(pos, &self.centerline(), self.thickness / 2.0 + tolerance)
    }
}

/// Window sitting in a wall; thinner than a wall and drawn above it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Window {
    id: ElementId,
    start: Pos2,
    end: Pos2,
    thickness: f32,
    style: ElementStyle,
}

impl Window {
    pub(crate) fn new(id: ElementId, start: Pos2, end: Pos2, thickness: f32) -> Self {
        Self {
            id,
            start,
            end,
            thickness,
            style: ElementStyle::window(),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn centerline(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    pub fn project_point(&self, pos: Pos2) -> Pos2 {
        self.centerline().project(pos)
    }

    pub(crate) fn set_endpoints(&mut self, start: Pos2, end: Pos2) {
        self.start = start;
        self.end = end;
    }
}

impl Element for Window {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Window
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        let line = self.centerline();
        RenderGeometry::new(draw_order::WINDOW).with(RenderPrimitive::OrientedRect {
            origin: self.start,
            length: line.length().max(MIN_SEGMENT_LENGTH),
            thickness: self.thickness,
            angle: line.angle(),
        })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::near_segment(pos, &self.centerline(), self.thickness / 2.0 + tolerance)
    }
}
