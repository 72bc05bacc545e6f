use crate::PlanApp;

/// The drawing canvas: routes pointer input and paints the scene
pub fn central_panel(app: &mut PlanApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            if !app.view_initialized {
                app.dispatcher.view_mut().offset = canvas_rect.min.to_vec2() + egui::vec2(40.0, 40.0);
                app.view_initialized = true;
            }

            app.input.set_canvas_rect(canvas_rect);
            for event in app.input.process_input(ctx) {
                app.dispatcher.handle_event(&event, &mut app.editor);
            }

            app.renderer.render(
                &painter,
                canvas_rect,
                app.dispatcher.view(),
                &app.editor.scene.in_draw_order(),
                app.dispatcher.preview(),
                app.editor.config.grid_size,
            );
        });
}
