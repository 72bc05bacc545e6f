use egui::{vec2, Pos2, Vec2};
use serde::{Deserialize, Serialize};

use super::common::{draw_order, ElementStyle};
use super::render_geometry::{RenderGeometry, RenderPrimitive};
use super::{Element, ElementKind};
use crate::geometry::rotate_about;
use crate::id_generator::ElementId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AttachmentKind {
    Switch,
    Outlet,
}

impl AttachmentKind {
    pub fn element_kind(self) -> ElementKind {
        match self {
            AttachmentKind::Switch => ElementKind::Switch,
            AttachmentKind::Outlet => ElementKind::Outlet,
        }
    }
}

/// Wall-mounted fixture drawn as a fixed-size glyph.
///
/// Position and rotation come from whoever places it, usually a wall
/// projection; the glyph never derives them itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
    id: ElementId,
    kind: AttachmentKind,
    position: Pos2,
    angle: f32,
    size: f32,
    style: ElementStyle,
}

impl Attachment {
    pub(crate) fn new(id: ElementId, kind: AttachmentKind, position: Pos2, angle: f32, size: f32) -> Self {
        Self {
            id,
            kind,
            position,
            angle,
            size,
            style: ElementStyle::attachment(),
        }
    }

    pub fn attachment_kind(&self) -> AttachmentKind {
        self.kind
    }

    pub fn position(&self) -> Pos2 {
        self.position
    }

    pub fn angle(&self) -> f32 {
        self.angle
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub(crate) fn set_placement(&mut self, position: Pos2, angle: f32) {
        self.position = position;
        self.angle = angle;
    }

    fn place(&self, local: Vec2) -> Pos2 {
        rotate_about(self.position, local, self.angle)
    }

    fn polyline(&self, local: &[Vec2], closed: bool) -> RenderPrimitive {
        RenderPrimitive::Polyline {
            points: local.iter().map(|v| self.place(*v)).collect(),
            closed,
        }
    }
}

impl Element for Attachment {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        self.kind.element_kind()
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        let h = self.size / 2.0;
        let geometry = RenderGeometry::new(draw_order::ATTACHMENT);
        match self.kind {
            // Diamond with a stem and a pivot dot
            AttachmentKind::Switch => geometry
                .with(self.polyline(
                    &[vec2(-h, 0.0), vec2(0.0, -h), vec2(h, 0.0), vec2(0.0, h)],
                    true,
                ))
                .with(self.polyline(&[vec2(0.0, 0.0), vec2(0.0, self.size)], false))
                .with(RenderPrimitive::Circle {
                    center: self.position,
                    radius: self.size / 4.0,
                }),
            // Square face with two prongs
            AttachmentKind::Outlet => {
                let prong = self.size / 3.0;
                geometry
                    .with(self.polyline(&[vec2(-h, -h), vec2(h, -h), vec2(h, h), vec2(-h, h)], true))
                    .with(self.polyline(&[vec2(-prong, 0.0), vec2(-prong, prong)], false))
                    .with(self.polyline(&[vec2(prong, 0.0), vec2(prong, prong)], false))
            }
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        pos.distance(self.position) <= self.size / 2.0 + tolerance
    }
}
