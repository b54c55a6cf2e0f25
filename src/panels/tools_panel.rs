use crate::DiagramApp;
use crate::tools::Tool;

pub fn tools_panel(app: &mut DiagramApp, ctx: &egui::Context) {
    egui::SidePanel::left("tools_panel")
        .resizable(false)
        .default_width(160.0)
        .show(ctx, |ui| {
            ui.heading("Tools");

            let current = app.editor().current_tool();
            for tool in Tool::AVAILABLE {
                if ui.selectable_label(current == tool, tool.label()).clicked() {
                    log::info!("Tool selected from UI: {tool}");
                    if let Err(err) = app.editor_mut().set_tool(tool) {
                        log::error!("{err}");
                    }
                }
            }

            ui.separator();

            let old_style = app.editor().renderer().style();
            let mut style = old_style;
            ui.horizontal(|ui| {
                ui.label("Color:");
                ui.color_edit_button_srgba(&mut style.stroke_color);
            });
            ui.horizontal(|ui| {
                ui.label("Thickness:");
                ui.add(egui::Slider::new(&mut style.stroke_width, 1.0..=10.0));
            });
            if style != old_style {
                app.editor_mut().renderer_mut().set_style(style);
            }

            ui.separator();

            if ui.button("Clear").clicked() {
                app.editor_mut().clear_scene();
            }

            let editor = app.editor();
            ui.label(format!("Shapes: {}", editor.scene().len()));
            ui.label(format!("State: {}", editor.mode().name()));
        });
}
