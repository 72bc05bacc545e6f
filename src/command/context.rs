use crate::event::EventBus;
use crate::scene::Scene;
use crate::selection::SelectionManager;

/// Everything a command may touch while it executes.
///
/// Borrowed from the editor context for the duration of one execution.
pub struct CommandContext<'a> {
    /// The scene being edited
    pub scene: &'a mut Scene,
    pub selection: &'a mut SelectionManager,
    /// The event bus for broadcasting changes
    pub events: &'a EventBus,
}

impl<'a> CommandContext<'a> {
    pub fn new(scene: &'a mut Scene, selection: &'a mut SelectionManager, events: &'a EventBus) -> Self {
        Self {
            scene,
            selection,
            events,
        }
    }
}
