use crate::config::{CONFIG_KEY, EditorConfig};
use crate::event::{Notification, NotificationSink};
use crate::input::{InputDispatcher, InputHandler};
use crate::panels::{central_panel, command_panel, properties_panel, tools_panel};
use crate::renderer::Renderer;
use crate::state::EditorContext;

/// Desktop shell around one editing session.
///
/// Only the [`EditorConfig`] is persisted; the drawing lives as long as the
/// window does.
pub struct PlanApp {
    pub(crate) editor: EditorContext,
    pub(crate) dispatcher: InputDispatcher,
    pub(crate) input: InputHandler,
    pub(crate) renderer: Renderer,
    notifications: NotificationSink,
    pub(crate) last_notification: Option<Notification>,
    pub(crate) command_line: String,
    pub(crate) view_initialized: bool,
}

impl Default for PlanApp {
    fn default() -> Self {
        Self::with_config(EditorConfig::default())
    }
}

impl PlanApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = cc
            .storage
            .and_then(|storage| eframe::get_value::<EditorConfig>(storage, CONFIG_KEY))
            .unwrap_or_default();
        Self::with_config(config)
    }

    pub fn with_config(config: EditorConfig) -> Self {
        let editor = EditorContext::new(config);
        let notifications = NotificationSink::new();
        editor.event_bus.subscribe(notifications.handler());

        Self {
            dispatcher: InputDispatcher::new(&editor.config),
            editor,
            input: InputHandler::new(),
            renderer: Renderer::new(),
            notifications,
            last_notification: None,
            command_line: String::new(),
            view_initialized: false,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn undo(&mut self) {
        if let Err(e) = self.editor.undo() {
            self.editor.report(&e);
        }
    }

    pub fn redo(&mut self) {
        if let Err(e) = self.editor.redo() {
            self.editor.report(&e);
        }
    }

    pub fn delete_selected(&mut self) {
        if let Err(e) = self.editor.delete_selected() {
            self.editor.report(&e);
        }
    }

    pub fn set_snap_enabled(&mut self, enabled: bool) {
        self.dispatcher.set_snap_enabled(enabled);
        self.editor.config.snap_to_grid = enabled;
    }

    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        // Typing into the command line must not trigger edits
        if ctx.wants_keyboard_input() {
            return;
        }

        let (undo, redo, delete, escape) = ctx.input(|i| {
            let command = i.modifiers.command;
            let z = i.key_pressed(egui::Key::Z);
            (
                command && z && !i.modifiers.shift,
                command && ((z && i.modifiers.shift) || i.key_pressed(egui::Key::Y)),
                i.key_pressed(egui::Key::Delete),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if undo {
            self.undo();
        }
        if redo {
            self.redo();
        }
        if delete {
            self.delete_selected();
        }
        if escape {
            self.dispatcher.cancel_tool(&mut self.editor);
        }
    }
}

impl eframe::App for PlanApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, CONFIG_KEY, &self.editor.config);
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.dispatcher.cancel_tool(&mut self.editor);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);

        tools_panel(self, ctx);
        command_panel(self, ctx);
        properties_panel(self, ctx);
        central_panel(self, ctx);

        if let Some(latest) = self.notifications.drain().pop() {
            self.last_notification = Some(latest);
        }
    }
}
