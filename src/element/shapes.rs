//! Generic drafting shapes: lines, rectangles and circles.

use egui::{vec2, Pos2, Rect};
use serde::{Deserialize, Serialize};

use super::common::{draw_order, ElementStyle, LABEL_OFFSET};
use super::render_geometry::{RenderGeometry, RenderPrimitive};
use super::{Element, ElementKind};
use crate::geometry::{hit_testing, Segment};
use crate::id_generator::ElementId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    id: ElementId,
    start: Pos2,
    end: Pos2,
    style: ElementStyle,
}

impl Line {
    pub(crate) fn new(id: ElementId, start: Pos2, end: Pos2) -> Self {
        Self {
            id,
            start,
            end,
            style: ElementStyle::line(),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    pub fn length(&self) -> f32 {
        self.segment().length()
    }

    pub(crate) fn set_endpoints(&mut self, start: Pos2, end: Pos2) {
        self.start = start;
        self.end = end;
    }
}

impl Element for Line {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Line
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        RenderGeometry::new(draw_order::SHAPE)
            .with(RenderPrimitive::Polyline {
                points: vec![self.start, self.end],
                closed: false,
            })
            .with(RenderPrimitive::Label {
                text: format!("{:.2}", self.length()),
                anchor: self.segment().midpoint() + vec2(LABEL_OFFSET, LABEL_OFFSET),
                angle: 0.0,
            })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::near_segment(pos, &self.segment(), self.style.stroke.width / 2.0 + tolerance)
    }
}

/// Axis-aligned rectangle, always stored normalized
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    id: ElementId,
    rect: Rect,
    style: ElementStyle,
}

impl Rectangle {
    /// Build from any two opposite corners
    pub(crate) fn new(id: ElementId, a: Pos2, b: Pos2) -> Self {
        Self {
            id,
            rect: Rect::from_two_pos(a, b),
            style: ElementStyle::rectangle(),
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn width(&self) -> f32 {
        self.rect.width()
    }

    pub fn height(&self) -> f32 {
        self.rect.height()
    }

    pub(crate) fn set_corners(&mut self, a: Pos2, b: Pos2) {
        self.rect = Rect::from_two_pos(a, b);
    }
}

impl Element for Rectangle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Rectangle
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        RenderGeometry::new(draw_order::SHAPE)
            .with(RenderPrimitive::Rect(self.rect))
            .with(RenderPrimitive::Label {
                text: format!("W:{:.2} H:{:.2}", self.width(), self.height()),
                anchor: self.rect.center() + vec2(LABEL_OFFSET, LABEL_OFFSET),
                angle: 0.0,
            })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::in_expanded_rect(pos, self.rect, tolerance)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    id: ElementId,
    center: Pos2,
    radius: f32,
    style: ElementStyle,
}

impl Circle {
    pub(crate) fn new(id: ElementId, center: Pos2, radius: f32) -> Self {
        Self {
            id,
            center,
            radius: radius.max(0.0),
            style: ElementStyle::circle(),
        }
    }

    pub fn center(&self) -> Pos2 {
        self.center
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub(crate) fn set_radius(&mut self, radius: f32) {
        self.radius = radius.max(0.0);
    }
}

impl Element for Circle {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Circle
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        RenderGeometry::new(draw_order::SHAPE).with(RenderPrimitive::Circle {
            center: self.center,
            radius: self.radius,
        })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::in_circle(pos, self.center, self.radius, tolerance)
    }
}
