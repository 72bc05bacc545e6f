use egui::Pos2;
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;

use super::common::{draw_order, ElementStyle, MIN_SEGMENT_LENGTH};
use super::render_geometry::{RenderGeometry, RenderPrimitive};
use super::{Element, ElementKind};
use crate::geometry::{hit_testing, Segment};
use crate::id_generator::ElementId;

/// Door slab with its swing arc, hinged at the start point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    id: ElementId,
    start: Pos2,
    end: Pos2,
    slab_width: f32,
    style: ElementStyle,
}

impl Door {
    pub(crate) fn new(id: ElementId, start: Pos2, end: Pos2, slab_width: f32) -> Self {
        Self {
            id,
            start,
            end,
            slab_width,
            style: ElementStyle::door(),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn slab_width(&self) -> f32 {
        self.slab_width
    }

    pub fn segment(&self) -> Segment {
        Segment::new(self.start, self.end)
    }

    /// Radius of the swing arc: twice the slab length
    pub fn swing_radius(&self) -> f32 {
        2.0 * self.segment().length().max(MIN_SEGMENT_LENGTH)
    }

    pub(crate) fn set_endpoints(&mut self, start: Pos2, end: Pos2) {
        self.start = start;
        self.end = end;
    }
}

impl Element for Door {
    fn id(&self) -> ElementId {
        self.id
    }

    fn kind(&self) -> ElementKind {
        ElementKind::Door
    }

    fn style(&self) -> &ElementStyle {
        &self.style
    }

    fn set_style(&mut self, style: ElementStyle) {
        self.style = style;
    }

    fn render_geometry(&self) -> RenderGeometry {
        let segment = self.segment();
        let angle = segment.angle();

        // Quarter swing, opening towards the left of the hinge direction
        RenderGeometry::new(draw_order::DOOR)
            .with(RenderPrimitive::OrientedRect {
                origin: self.start,
                length: segment.length().max(MIN_SEGMENT_LENGTH),
                thickness: self.slab_width,
                angle,
            })
            .with(RenderPrimitive::Arc {
                center: self.start,
                radius: self.swing_radius(),
                start_angle: angle,
                sweep: -FRAC_PI_2,
            })
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        hit_testing::near_segment(pos, &self.segment(), self.slab_width / 2.0 + tolerance)
    }
}
