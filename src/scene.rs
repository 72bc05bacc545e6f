use egui::Pos2;
use log::debug;

use crate::element::{Element, ElementKind, ElementType, Wall};
use crate::id_generator::ElementId;

/// Every committed element of the drawing.
///
/// The scene is the only owner of elements; everything else refers to them by
/// [`ElementId`]. Iteration follows insertion order.
#[derive(Debug, Default, Clone)]
pub struct Scene {
    elements: Vec<ElementType>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    pub fn add(&mut self, element: ElementType) {
        debug!("Scene: add {} {}", element.element_type(), element.id());
        self.elements.push(element);
    }

    /// Take an element out of the scene, keeping the order of the rest
    pub fn remove(&mut self, id: ElementId) -> Option<ElementType> {
        let index = self.elements.iter().position(|e| e.id() == id)?;
        debug!("Scene: remove {}", id);
        Some(self.elements.remove(index))
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.elements.iter().any(|e| e.id() == id)
    }

    pub fn get(&self, id: ElementId) -> Option<&ElementType> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut ElementType> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }

    pub fn elements(&self) -> &[ElementType] {
        &self.elements
    }

    pub fn ids(&self) -> Vec<ElementId> {
        self.elements.iter().map(|e| e.id()).collect()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// All elements of one variant
    pub fn of_kind(&self, kind: ElementKind) -> impl Iterator<Item = &ElementType> + '_ {
        self.elements.iter().filter(move |e| e.kind() == kind)
    }

    pub fn walls(&self) -> impl Iterator<Item = &Wall> + '_ {
        self.elements.iter().filter_map(ElementType::as_wall)
    }

    /// Topmost element under `pos`: highest draw order first, then the most
    /// recently added.
    pub fn element_at(&self, pos: Pos2, tolerance: f32) -> Option<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.hit_test(pos, tolerance))
            .max_by_key(|(index, e)| (e.draw_order(), *index))
            .map(|(_, e)| e.id())
    }

    /// Paint order for the renderer
    pub fn in_draw_order(&self) -> Vec<&ElementType> {
        let mut sorted: Vec<&ElementType> = self.elements.iter().collect();
        // Stable sort keeps insertion order within one layer
        sorted.sort_by_key(|e| e.draw_order());
        sorted
    }
}
