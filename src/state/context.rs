//! The editing session: scene, selection and history behind one owner.
//!
//! Every mutation of the scene goes through here so that the selection
//! highlight, the history stacks and the event bus stay consistent.

use egui::Pos2;
use log::{debug, warn};

use crate::command::{Command, CommandContext, CommandHistory};
use crate::config::EditorConfig;
use crate::element::ElementType;
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus, LoggingHandler, Notification};
use crate::id_generator::ElementId;
use crate::scene::Scene;
use crate::selection::SelectionManager;
use crate::tools::ToolContext;

/// One editor session, created when the editor opens and dropped on close
#[derive(Debug)]
pub struct EditorContext {
    pub scene: Scene,
    pub selection: SelectionManager,
    pub history: CommandHistory,
    /// The event bus for broadcasting editor events
    pub event_bus: EventBus,
    pub config: EditorConfig,
}

impl Default for EditorContext {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl EditorContext {
    pub fn new(config: EditorConfig) -> Self {
        let event_bus = EventBus::new();
        event_bus.subscribe(Box::new(LoggingHandler));
        Self {
            scene: Scene::new(),
            selection: SelectionManager::new(),
            history: CommandHistory::new(),
            event_bus,
            config: config.sanitized(),
        }
    }

    /// Run a command and record it for undo
    pub fn execute(&mut self, command: Command) -> EditorResult<()> {
        let Self {
            scene,
            selection,
            history,
            event_bus,
            ..
        } = self;
        let mut ctx = CommandContext::new(scene, selection, event_bus);
        history.execute(command, &mut ctx)?;
        self.emit_history_changed();
        Ok(())
    }

    /// Returns whether anything was undone
    pub fn undo(&mut self) -> EditorResult<bool> {
        let Self {
            scene,
            selection,
            history,
            event_bus,
            ..
        } = self;
        let mut ctx = CommandContext::new(scene, selection, event_bus);
        let undone = history.undo(&mut ctx).map_err(EditorError::Undo)?;
        if undone {
            self.emit_history_changed();
        }
        Ok(undone)
    }

    /// Returns whether anything was redone
    pub fn redo(&mut self) -> EditorResult<bool> {
        let Self {
            scene,
            selection,
            history,
            event_bus,
            ..
        } = self;
        let mut ctx = CommandContext::new(scene, selection, event_bus);
        let redone = history.redo(&mut ctx).map_err(EditorError::Redo)?;
        if redone {
            self.emit_history_changed();
        }
        Ok(redone)
    }

    /// Remove the selected element as an undoable edit.
    ///
    /// Returns false when nothing was selected.
    pub fn delete_selected(&mut self) -> EditorResult<bool> {
        let Some(id) = self.selection.current() else {
            debug!("Delete: nothing selected");
            return Ok(false);
        };

        // Drop the highlight first so the snapshot carries the normal style
        self.select(None);
        let Some(snapshot) = self.scene.get(id).cloned() else {
            warn!("Delete: selected element {} is not in the scene", id);
            return Ok(false);
        };

        self.execute(Command::remove(snapshot))?;
        Ok(true)
    }

    pub fn select(&mut self, target: Option<ElementId>) {
        self.selection.select(&mut self.scene, &self.event_bus, target);
    }

    /// Select the topmost element under `pos`, or clear the selection
    pub fn select_at(&mut self, pos: Pos2) -> Option<ElementId> {
        let hit = self.scene.element_at(pos, self.config.hit_tolerance);
        self.select(hit);
        hit
    }

    pub fn selected_element(&self) -> Option<&ElementType> {
        self.selection.current().and_then(|id| self.scene.get(id))
    }

    /// Surface an error on the notification channel
    pub fn report(&self, error: &EditorError) {
        self.event_bus.emit(EditorEvent::Notification(Notification {
            severity: error.severity(),
            title: error.title().to_string(),
            message: error.to_string(),
        }));
    }

    /// Snapshot handed to the active tool for one pointer event
    pub fn tool_context(&self, ortho: bool) -> ToolContext<'_> {
        ToolContext {
            scene: &self.scene,
            config: &self.config,
            ortho,
        }
    }

    fn emit_history_changed(&self) {
        self.event_bus.emit(EditorEvent::HistoryChanged {
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
        });
    }
}
