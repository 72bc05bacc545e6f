use log::{debug, warn};

use crate::element::{Element, ElementStyle};
use crate::event::{EditorEvent, EventBus, SelectionEvent};
use crate::id_generator::ElementId;
use crate::scene::Scene;

/// Owns the single selected element and its highlight.
///
/// The selection refers to the element by id only. Whoever removes an element
/// from the scene must clear the selection first, otherwise the saved style
/// has nowhere to go back to.
#[derive(Debug, Default)]
pub struct SelectionManager {
    current: Option<ElementId>,
    /// Style the current element had before it was highlighted
    previous_style: Option<ElementStyle>,
}

impl SelectionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Option<ElementId> {
        self.current
    }

    pub fn is_selected(&self, id: ElementId) -> bool {
        self.current == Some(id)
    }

    /// Select `target`, or clear the selection with `None`.
    ///
    /// Restores the previous element's style, highlights the new one and
    /// notifies the bus. Re-selecting the current element leaves its style alone.
    pub fn select(&mut self, scene: &mut Scene, events: &EventBus, target: Option<ElementId>) {
        if target.is_some() && target == self.current {
            debug!("Selection: {:?} already selected", target);
            self.notify(events);
            return;
        }

        self.clear_highlight(scene);

        if let Some(id) = target {
            match scene.get_mut(id) {
                Some(element) => {
                    let style = *element.style();
                    self.previous_style = Some(style);
                    element.set_style(style.highlighted());
                    self.current = Some(id);
                }
                None => warn!("Selection: element {} is not in the scene", id),
            }
        }

        debug!("Selection: now {:?}", self.current);
        self.notify(events);
    }

    fn clear_highlight(&mut self, scene: &mut Scene) {
        if let (Some(id), Some(style)) = (self.current, self.previous_style) {
            match scene.get_mut(id) {
                Some(element) => element.set_style(style),
                None => warn!("Selection: element {} vanished before deselect", id),
            }
        }
        self.current = None;
        self.previous_style = None;
    }

    fn notify(&self, events: &EventBus) {
        let event = match self.current {
            Some(id) => SelectionEvent::Selected(id),
            None => SelectionEvent::Cleared,
        };
        events.emit(EditorEvent::SelectionChanged(event));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::factory;
    use crate::event::{EventHandler, SelectionEvent};
    use egui::pos2;
    use std::sync::Arc;

    use parking_lot::Mutex;

    #[derive(Clone, Default)]
    struct Recorder(Arc<Mutex<Vec<SelectionEvent>>>);

    impl EventHandler for Recorder {
        fn handle_event(&mut self, event: &EditorEvent) {
            if let EditorEvent::SelectionChanged(e) = event {
                self.0.lock().push(*e);
            }
        }
    }

    fn scene_with_wall() -> (Scene, ElementId) {
        let mut scene = Scene::new();
        let wall = factory::create_wall(pos2(0.0, 0.0), pos2(100.0, 0.0), 24.0);
        let id = wall.id();
        scene.add(wall);
        (scene, id)
    }

    #[test]
    fn test_select_highlights_and_deselect_restores() {
        let (mut scene, id) = scene_with_wall();
        let events = EventBus::new();
        let mut selection = SelectionManager::new();
        let before = *scene.get(id).unwrap().style();

        selection.select(&mut scene, &events, Some(id));
        assert_eq!(selection.current(), Some(id));
        assert_ne!(*scene.get(id).unwrap().style(), before);

        selection.select(&mut scene, &events, None);
        assert_eq!(selection.current(), None);
        assert_eq!(*scene.get(id).unwrap().style(), before);
    }

    #[test]
    fn test_repeated_cycles_do_not_drift() {
        let (mut scene, id) = scene_with_wall();
        let events = EventBus::new();
        let mut selection = SelectionManager::new();
        let before = *scene.get(id).unwrap().style();

        for _ in 0..5 {
            selection.select(&mut scene, &events, Some(id));
            selection.select(&mut scene, &events, Some(id));
            selection.select(&mut scene, &events, None);
        }
        assert_eq!(*scene.get(id).unwrap().style(), before);
    }

    #[test]
    fn test_reselect_keeps_highlight_and_renotifies() {
        let (mut scene, id) = scene_with_wall();
        let events = EventBus::new();
        let recorder = Recorder::default();
        events.subscribe(Box::new(recorder.clone()));
        let mut selection = SelectionManager::new();

        selection.select(&mut scene, &events, Some(id));
        let highlighted = *scene.get(id).unwrap().style();
        selection.select(&mut scene, &events, Some(id));

        assert_eq!(*scene.get(id).unwrap().style(), highlighted);
        assert_eq!(
            *recorder.0.lock(),
            vec![SelectionEvent::Selected(id), SelectionEvent::Selected(id)]
        );
    }

    #[test]
    fn test_switching_selection_restores_previous() {
        let (mut scene, first) = scene_with_wall();
        let line = factory::create_line(pos2(0.0, 50.0), pos2(50.0, 50.0));
        let second = line.id();
        scene.add(line);
        let events = EventBus::new();
        let mut selection = SelectionManager::new();
        let first_style = *scene.get(first).unwrap().style();

        selection.select(&mut scene, &events, Some(first));
        selection.select(&mut scene, &events, Some(second));

        assert_eq!(*scene.get(first).unwrap().style(), first_style);
        assert!(selection.is_selected(second));
    }

    #[test]
    fn test_selecting_unknown_id_clears() {
        let (mut scene, id) = scene_with_wall();
        let events = EventBus::new();
        let mut selection = SelectionManager::new();
        selection.select(&mut scene, &events, Some(id));

        let stray = crate::id_generator::generate_id();
        selection.select(&mut scene, &events, Some(stray));
        assert_eq!(selection.current(), None);
    }
}
