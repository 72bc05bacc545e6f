use egui::Pos2;
use serde::{Deserialize, Serialize};

mod attachment;
pub mod common;
mod door;
mod render_geometry;
mod shapes;
mod wall;

pub use attachment::{Attachment, AttachmentKind};
pub use common::{ElementStyle, MIN_SEGMENT_LENGTH};
pub use door::Door;
pub use render_geometry::{RenderGeometry, RenderPrimitive};
pub use shapes::{Circle, Line, Rectangle};
pub use wall::{Wall, Window};

use crate::geometry::Segment;
use crate::id_generator::ElementId;

/// Common trait that all scene elements implement
pub trait Element {
    /// Get the unique identifier for this element
    fn id(&self) -> ElementId;

    fn kind(&self) -> ElementKind;

    /// Get the element type as a string
    fn element_type(&self) -> &'static str {
        self.kind().name()
    }

    /// Current presentation state (stroke, fill, dash)
    fn style(&self) -> &ElementStyle;

    fn set_style(&mut self, style: ElementStyle);

    /// Derive the drawable description from the defining geometry
    fn render_geometry(&self) -> RenderGeometry;

    /// Test if the element covers the given scene position
    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool;
}

/// The variant of an element, used for "all walls" style queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ElementKind {
    Wall,
    Window,
    Door,
    Switch,
    Outlet,
    Line,
    Rectangle,
    Circle,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Wall => "Wall",
            ElementKind::Window => "Window",
            ElementKind::Door => "Door",
            ElementKind::Switch => "Switch",
            ElementKind::Outlet => "Outlet",
            ElementKind::Line => "Line",
            ElementKind::Rectangle => "Rectangle",
            ElementKind::Circle => "Circle",
        }
    }
}

/// Enumeration of all element types in the scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ElementType {
    Wall(Wall),
    Window(Window),
    Door(Door),
    Attachment(Attachment),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Element for ElementType {
    fn id(&self) -> ElementId {
        match self {
            ElementType::Wall(e) => e.id(),
            ElementType::Window(e) => e.id(),
            ElementType::Door(e) => e.id(),
            ElementType::Attachment(e) => e.id(),
            ElementType::Line(e) => e.id(),
            ElementType::Rectangle(e) => e.id(),
            ElementType::Circle(e) => e.id(),
        }
    }

    fn kind(&self) -> ElementKind {
        match self {
            ElementType::Wall(e) => e.kind(),
            ElementType::Window(e) => e.kind(),
            ElementType::Door(e) => e.kind(),
            ElementType::Attachment(e) => e.kind(),
            ElementType::Line(e) => e.kind(),
            ElementType::Rectangle(e) => e.kind(),
            ElementType::Circle(e) => e.kind(),
        }
    }

    fn style(&self) -> &ElementStyle {
        match self {
            ElementType::Wall(e) => e.style(),
            ElementType::Window(e) => e.style(),
            ElementType::Door(e) => e.style(),
            ElementType::Attachment(e) => e.style(),
            ElementType::Line(e) => e.style(),
            ElementType::Rectangle(e) => e.style(),
            ElementType::Circle(e) => e.style(),
        }
    }

    fn set_style(&mut self, style: ElementStyle) {
        match self {
            ElementType::Wall(e) => e.set_style(style),
            ElementType::Window(e) => e.set_style(style),
            ElementType::Door(e) => e.set_style(style),
            ElementType::Attachment(e) => e.set_style(style),
            ElementType::Line(e) => e.set_style(style),
            ElementType::Rectangle(e) => e.set_style(style),
            ElementType::Circle(e) => e.set_style(style),
        }
    }

    fn render_geometry(&self) -> RenderGeometry {
        match self {
            ElementType::Wall(e) => e.render_geometry(),
            ElementType::Window(e) => e.render_geometry(),
            ElementType::Door(e) => e.render_geometry(),
            ElementType::Attachment(e) => e.render_geometry(),
            ElementType::Line(e) => e.render_geometry(),
            ElementType::Rectangle(e) => e.render_geometry(),
            ElementType::Circle(e) => e.render_geometry(),
        }
    }

    fn hit_test(&self, pos: Pos2, tolerance: f32) -> bool {
        match self {
            ElementType::Wall(e) => e.hit_test(pos, tolerance),
            ElementType::Window(e) => e.hit_test(pos, tolerance),
            ElementType::Door(e) => e.hit_test(pos, tolerance),
            ElementType::Attachment(e) => e.hit_test(pos, tolerance),
            ElementType::Line(e) => e.hit_test(pos, tolerance),
            ElementType::Rectangle(e) => e.hit_test(pos, tolerance),
            ElementType::Circle(e) => e.hit_test(pos, tolerance),
        }
    }
}

// Geometry edits used by the tools while a gesture is previewed
impl ElementType {
    pub fn as_wall(&self) -> Option<&Wall> {
        match self {
            ElementType::Wall(wall) => Some(wall),
            _ => None,
        }
    }

    /// Defining centerline of walls and windows
    pub fn centerline(&self) -> Option<Segment> {
        match self {
            ElementType::Wall(e) => Some(e.centerline()),
            ElementType::Window(e) => Some(e.centerline()),
            _ => None,
        }
    }

    /// Projection onto the centerline of walls and windows
    pub fn project_point(&self, pos: Pos2) -> Option<Pos2> {
        self.centerline().map(|line| line.project(pos))
    }

    pub fn draw_order(&self) -> i32 {
        self.render_geometry().draw_order
    }

    pub fn set_endpoints(&mut self, start: Pos2, end: Pos2) -> Result<(), String> {
        match self {
            ElementType::Wall(e) => e.set_endpoints(start, end),
            ElementType::Window(e) => e.set_endpoints(start, end),
            ElementType::Door(e) => e.set_endpoints(start, end),
            ElementType::Line(e) => e.set_endpoints(start, end),
            other => return Err(format!("{} has no endpoints", other.element_type())),
        }
        Ok(())
    }

    pub fn set_corners(&mut self, a: Pos2, b: Pos2) -> Result<(), String> {
        match self {
            ElementType::Rectangle(e) => {
                e.set_corners(a, b);
                Ok(())
            }
            other => Err(format!("{} has no corners", other.element_type())),
        }
    }

    pub fn set_radius(&mut self, radius: f32) -> Result<(), String> {
        match self {
            ElementType::Circle(e) => {
                e.set_radius(radius);
                Ok(())
            }
            other => Err(format!("{} has no radius", other.element_type())),
        }
    }

    pub fn set_placement(&mut self, position: Pos2, angle: f32) -> Result<(), String> {
        match self {
            ElementType::Attachment(e) => {
                e.set_placement(position, angle);
                Ok(())
            }
            other => Err(format!("{} is not placed externally", other.element_type())),
        }
    }
}

/// Factory functions for creating elements, each with a fresh identity
pub mod factory {
    use super::*;
    use crate::id_generator::generate_id;

    pub fn create_wall(start: Pos2, end: Pos2, thickness: f32) -> ElementType {
        ElementType::Wall(Wall::new(generate_id(), start, end, thickness))
    }

    pub fn create_window(start: Pos2, end: Pos2, thickness: f32) -> ElementType {
        ElementType::Window(Window::new(generate_id(), start, end, thickness))
    }

    pub fn create_door(start: Pos2, end: Pos2, slab_width: f32) -> ElementType {
        ElementType::Door(Door::new(generate_id(), start, end, slab_width))
    }

    pub fn create_attachment(kind: AttachmentKind, position: Pos2, angle: f32, size: f32) -> ElementType {
        ElementType::Attachment(Attachment::new(generate_id(), kind, position, angle, size))
    }

    pub fn create_line(start: Pos2, end: Pos2) -> ElementType {
        ElementType::Line(Line::new(generate_id(), start, end))
    }

    pub fn create_rectangle(a: Pos2, b: Pos2) -> ElementType {
        ElementType::Rectangle(Rectangle::new(generate_id(), a, b))
    }

    pub fn create_circle(center: Pos2, radius: f32) -> ElementType {
        ElementType::Circle(Circle::new(generate_id(), center, radius))
    }
}
