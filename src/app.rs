use crate::event::EditorEvent;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::{CanvasStyle, Renderer};
use crate::state::EditorContext;
use crate::tools::Tool;

/// UI preferences restored between runs. The scene itself is never saved.
#[derive(serde::Deserialize, serde::Serialize, Debug, Clone, Copy, Default, PartialEq)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct Preferences {
    pub tool: Tool,
    pub style: CanvasStyle,
}

#[derive(Debug)]
pub struct DiagramApp {
    editor: EditorContext<Renderer>,
    input: InputHandler,
}

impl Default for DiagramApp {
    fn default() -> Self {
        Self::with_preferences(Preferences::default())
    }
}

impl DiagramApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let preferences: Preferences = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        let app = Self::with_preferences(preferences);

        // Scene edits happen inside input handling, so ask for the frame that shows them
        let ctx = cc.egui_ctx.clone();
        app.editor.event_bus().subscribe(Box::new(move |event: &EditorEvent| {
            if event.changes_scene() {
                ctx.request_repaint();
            }
        }));

        app
    }

    pub fn with_preferences(preferences: Preferences) -> Self {
        let mut editor = EditorContext::new(Renderer::new(preferences.style));
        if let Err(err) = editor.set_tool(preferences.tool) {
            log::warn!("Ignoring saved tool: {err}");
        }

        Self {
            editor,
            input: InputHandler::new(),
        }
    }

    pub fn editor(&self) -> &EditorContext<Renderer> {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext<Renderer> {
        &mut self.editor
    }

    pub fn preferences(&self) -> Preferences {
        Preferences {
            tool: self.editor.current_tool(),
            style: self.editor.renderer().style(),
        }
    }

    /// Feeds this frame's pointer input on the canvas to the editor
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        for event in self.input.process_input(ctx, canvas_rect) {
            if let Err(err) = self.editor.handle_event(&event) {
                log::error!("Failed to handle {event:?}: {err}");
            }
        }
    }
}

impl eframe::App for DiagramApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.preferences());
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preferences_restore_tool_and_style() {
        let preferences = Preferences {
            tool: Tool::Select,
            style: CanvasStyle {
                stroke_width: 4.0,
                ..Default::default()
            },
        };
        let app = DiagramApp::with_preferences(preferences);

        assert_eq!(app.preferences(), preferences);
    }

    #[test]
    fn test_saved_reserved_tool_falls_back_to_default() {
        let app = DiagramApp::with_preferences(Preferences {
            tool: Tool::Freehand,
            ..Default::default()
        });

        assert_eq!(app.editor().current_tool(), Tool::default());
    }
}
