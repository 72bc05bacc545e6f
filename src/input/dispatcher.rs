use egui::{PointerButton, Pos2};
use log::{debug, info, warn};

use super::{CanvasView, InputEvent};
use crate::command::Command;
use crate::config::EditorConfig;
use crate::element::ElementType;
use crate::error::{EditorError, EditorResult};
use crate::event::EditorEvent;
use crate::geometry::snap_to_grid;
use crate::state::{EditorContext, EditorState};
use crate::tools::{new_tool, Positioning, Tool, ToolType};

/// Routes pointer input to the active tool, or to selection when no tool is active.
///
/// Errors raised while handling an event are reported on the editor's
/// notification channel; the event still counts as handled.
#[derive(Debug, Clone)]
pub struct InputDispatcher {
    state: EditorState,
    ortho: bool,
    snap_enabled: bool,
    view: CanvasView,
    /// Last screen position of an in-progress middle-button pan
    pan_from: Option<Pos2>,
}

impl InputDispatcher {
    pub fn new(config: &EditorConfig) -> Self {
        Self {
            state: EditorState::Idle,
            ortho: false,
            snap_enabled: config.snap_to_grid,
            view: CanvasView::default(),
            pan_from: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn active_tool(&self) -> Option<&ToolType> {
        self.state.active_tool()
    }

    pub fn active_tool_name(&self) -> Option<&'static str> {
        self.state.active_tool().map(|tool| tool.name())
    }

    /// The active tool's in-flight preview, if any
    pub fn preview(&self) -> Option<&ElementType> {
        self.state.active_tool().and_then(|tool| tool.preview())
    }

    pub fn view(&self) -> &CanvasView {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut CanvasView {
        &mut self.view
    }

    pub fn set_orthogonal(&mut self, active: bool) {
        if self.ortho != active {
            debug!("Orthogonal constraint {}", if active { "on" } else { "off" });
        }
        self.ortho = active;
    }

    pub fn is_orthogonal(&self) -> bool {
        self.ortho
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.snap_enabled = enabled;
    }

    pub fn snap_enabled(&self) -> bool {
        self.snap_enabled
    }

    /// Activate a tool by its command-line name.
    ///
    /// Unknown names are reported and leave the current tool in place.
    pub fn activate_tool(&mut self, name: &str, editor: &mut EditorContext) -> bool {
        match new_tool(name) {
            Some(tool) => {
                self.set_tool(tool, editor);
                true
            }
            None => {
                warn!("Unknown tool name {:?}", name);
                editor.report(&EditorError::UnknownTool(name.trim().to_string()));
                false
            }
        }
    }

    /// Replace the active tool, cancelling the outgoing tool's gesture
    pub fn set_tool(&mut self, tool: ToolType, editor: &mut EditorContext) {
        let new = tool.name();
        let old = self.state.set_active_tool(tool);
        editor.event_bus.emit(EditorEvent::ToolChanged { old, new: Some(new) });
    }

    /// Cancel the active tool and return to selection mode
    pub fn cancel_tool(&mut self, editor: &mut EditorContext) {
        if let Some(old) = self.state.clear_tool() {
            info!("Tool {} cancelled", old);
            editor.event_bus.emit(EditorEvent::ToolChanged { old: Some(old), new: None });
        }
    }

    /// Handle one raw input event in screen coordinates.
    ///
    /// Returns true when the event was consumed.
    pub fn handle_event(&mut self, event: &InputEvent, editor: &mut EditorContext) -> bool {
        match event {
            InputEvent::ModifiersChanged { shift } => {
                self.set_orthogonal(*shift);
                true
            }
            InputEvent::PointerDown { location, button } => match button {
                PointerButton::Primary if location.in_canvas => {
                    let pos = self.view.screen_to_scene(location.position);
                    self.pointer_down(pos, editor);
                    true
                }
                PointerButton::Middle if location.in_canvas => {
                    self.pan_from = Some(location.position);
                    true
                }
                _ => false,
            },
            InputEvent::PointerMove { location, held_buttons } => {
                if let Some(from) = self.pan_from {
                    if held_buttons.contains(&PointerButton::Middle) {
                        self.view.pan(location.position - from);
                        self.pan_from = Some(location.position);
                        return true;
                    }
                    self.pan_from = None;
                }
                let pos = self.view.screen_to_scene(location.position);
                self.pointer_move(pos, editor);
                true
            }
            InputEvent::PointerUp { location, button } => match button {
                PointerButton::Primary => {
                    let pos = self.view.screen_to_scene(location.position);
                    self.pointer_up(pos, editor);
                    true
                }
                PointerButton::Middle => self.pan_from.take().is_some(),
                _ => false,
            },
            InputEvent::Scroll { location, delta } => {
                if !location.in_canvas {
                    return false;
                }
                let factor = if *delta > 0.0 {
                    editor.config.zoom_factor
                } else {
                    1.0 / editor.config.zoom_factor
                };
                self.view.zoom_at(location.position, factor);
                true
            }
        }
    }

    /// Pointer press at a scene position
    pub fn pointer_down(&mut self, pos: Pos2, editor: &mut EditorContext) {
        let result = self.try_pointer_down(pos, editor);
        Self::finish(result, editor);
    }

    pub fn pointer_move(&mut self, pos: Pos2, editor: &mut EditorContext) {
        let result = self.try_pointer_move(pos, editor);
        Self::finish(result, editor);
    }

    pub fn pointer_up(&mut self, pos: Pos2, editor: &mut EditorContext) {
        let result = self.try_pointer_up(pos, editor);
        Self::finish(result, editor);
    }

    fn try_pointer_down(&mut self, raw: Pos2, editor: &mut EditorContext) -> EditorResult<()> {
        let pos = self.position(raw, editor);
        let Some(tool) = self.state.active_tool_mut() else {
            let hit = editor.select_at(raw);
            debug!("Selection click at {:?} hit {:?}", raw, hit);
            return Ok(());
        };
        let command = tool.on_pointer_down(pos, &editor.tool_context(self.ortho))?;
        Self::commit(command, editor)
    }

    fn try_pointer_move(&mut self, raw: Pos2, editor: &mut EditorContext) -> EditorResult<()> {
        let pos = self.position(raw, editor);
        let Some(tool) = self.state.active_tool_mut() else {
            return Ok(());
        };
        let command = tool.on_pointer_move(pos, &editor.tool_context(self.ortho))?;
        Self::commit(command, editor)
    }

    fn try_pointer_up(&mut self, raw: Pos2, editor: &mut EditorContext) -> EditorResult<()> {
        let pos = self.position(raw, editor);
        let Some(tool) = self.state.active_tool_mut() else {
            return Ok(());
        };
        let command = tool.on_pointer_up(pos, &editor.tool_context(self.ortho))?;
        Self::commit(command, editor)
    }

    /// Apply the active tool's positioning policy
    fn position(&self, raw: Pos2, editor: &EditorContext) -> Pos2 {
        match self.state.active_tool().map(|tool| tool.positioning()) {
            Some(Positioning::GridSnapped) if self.snap_enabled => snap_to_grid(raw, editor.config.grid_size),
            _ => raw,
        }
    }

    fn commit(command: Option<Command>, editor: &mut EditorContext) -> EditorResult<()> {
        match command {
            Some(command) => editor.execute(command),
            None => Ok(()),
        }
    }

    fn finish(result: EditorResult<()>, editor: &EditorContext) {
        if let Err(e) = result {
            debug!("Pointer event ended with {:?}", e);
            editor.report(&e);
        }
    }
}
