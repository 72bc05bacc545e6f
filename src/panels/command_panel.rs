use crate::PlanApp;
use crate::event::Severity;

/// Bottom bar: command line for tool names and the status line
pub fn command_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("command_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Command:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut app.command_line)
                    .hint_text("WALL, WINDOW, DOOR, SWITCH, OUTLET, LINE, RECTANGLE, CIRCLE")
                    .desired_width(320.0),
            );
            if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                let command = std::mem::take(&mut app.command_line);
                if !command.trim().is_empty() {
                    app.dispatcher.activate_tool(&command, &mut app.editor);
                }
            }
        });

        ui.horizontal(|ui| {
            let tool = app.dispatcher.active_tool_name().unwrap_or("Select");
            ui.label(format!("Tool: {}", tool));
            if app.dispatcher.is_orthogonal() {
                ui.label("ORTHO");
            }
            ui.separator();
            if let Some(note) = &app.last_notification {
                let color = match note.severity {
                    Severity::Info => ui.visuals().text_color(),
                    Severity::Warning => ui.visuals().warn_fg_color,
                    Severity::Error => ui.visuals().error_fg_color,
                };
                ui.colored_label(color, format!("{}: {}", note.title, note.message));
            }
        });
    });
}
