use crate::DiagramApp;

pub fn central_panel(app: &mut DiagramApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::drag());
            let canvas_rect = response.rect;

            app.handle_input(ctx, canvas_rect);

            let editor = app.editor();
            editor.renderer().render(&painter, editor.scene(), canvas_rect);
        });
}
