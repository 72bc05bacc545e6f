use crate::PlanApp;
use crate::components::ToolButton;
use crate::tools::TOOL_NAMES;

/// Top toolbar: one button per tool plus the edit actions
pub fn tools_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active = app.dispatcher.active_tool_name();

            for name in TOOL_NAMES {
                let button = ToolButton::new(name, active == Some(name));
                if ui.add(button).clicked() {
                    log::info!("Tool selected from UI: {}", name);
                    if active == Some(name) {
                        app.dispatcher.cancel_tool(&mut app.editor);
                    } else {
                        app.dispatcher.activate_tool(name, &mut app.editor);
                    }
                }
            }

            ui.separator();

            if ui.add_enabled(app.editor.history.can_undo(), egui::Button::new("Undo")).clicked() {
                app.undo();
            }
            if ui.add_enabled(app.editor.history.can_redo(), egui::Button::new("Redo")).clicked() {
                app.redo();
            }
            if ui
                .add_enabled(app.editor.selection.current().is_some(), egui::Button::new("Delete"))
                .clicked()
            {
                app.delete_selected();
            }

            ui.separator();

            let mut snap = app.dispatcher.snap_enabled();
            if ui.checkbox(&mut snap, "Snap to grid").changed() {
                app.set_snap_enabled(snap);
            }
        });
    });
}
