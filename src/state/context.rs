//! The single owned context that turns pointer events into scene edits.
//!
//! `EditorContext` holds the scene, the current tool and the state machine, and is the
//! only thing that mutates the scene. The presentation shell reads the scene through
//! [`EditorContext::scene`] and learns about changes from the [`EventBus`].
//!
//! # Example
//!
//! ```rust
//! use eframe_diagram::renderer::AnchorRenderer;
//! use eframe_diagram::state::{EditorContext, EditorMode};
//! use eframe_diagram::tools::Tool;
//!
//! let mut editor = EditorContext::new(AnchorRenderer);
//! editor.set_tool(Tool::Line).unwrap();
//!
//! editor.pointer_down(10.0, 10.0).unwrap();
//! editor.pointer_move(50.0, 60.0).unwrap();
//! editor.pointer_up();
//!
//! assert_eq!(editor.mode(), EditorMode::Idle);
//! assert_eq!(editor.scene().len(), 1);
//! ```
use egui::pos2;
use log::{debug, error, info, warn};

use super::{EditorMode, EditorState};
use crate::element::make_shape;
use crate::error::{EditorError, EditorResult};
use crate::event::{EditorEvent, EventBus};
use crate::geometry::hit_test;
use crate::input::InputEvent;
use crate::renderer::{Renderer, ShapeRenderer};
use crate::scene::Scene;
use crate::tools::Tool;

/// Scene, tool and state machine for one editing session
pub struct EditorContext<R: ShapeRenderer = Renderer> {
    state: EditorState<R::Primitive>,
    scene: Scene<R::Primitive>,
    current_tool: Tool,
    renderer: R,
    event_bus: EventBus,
}

impl<R: ShapeRenderer> std::fmt::Debug for EditorContext<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorContext")
            .field("mode", &self.state.mode())
            .field("active_id", &self.state.active_shape().map(|s| s.id()))
            .field("shapes", &self.scene.len())
            .field("current_tool", &self.current_tool)
            .field("event_bus", &self.event_bus)
            .finish_non_exhaustive()
    }
}

impl<R: ShapeRenderer + Default> Default for EditorContext<R> {
    fn default() -> Self {
        Self::new(R::default())
    }
}

impl<R: ShapeRenderer> EditorContext<R> {
    /// Starts idle, with an empty scene and the line tool
    pub fn new(renderer: R) -> Self {
        Self {
            state: EditorState::Idle,
            scene: Scene::new(),
            current_tool: Tool::default(),
            renderer,
            event_bus: EventBus::new(),
        }
    }

    pub fn scene(&self) -> &Scene<R::Primitive> {
        &self.scene
    }

    pub fn state(&self) -> &EditorState<R::Primitive> {
        &self.state
    }

    pub fn mode(&self) -> EditorMode {
        self.state.mode()
    }

    pub fn current_tool(&self) -> Tool {
        self.current_tool
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Changes to the renderer only affect primitives built afterwards
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }

    /// Selects the tool used by the next pointer-down.
    ///
    /// A drag already in progress keeps going with the shape it started with.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::UnsupportedTool`] for a shape kind without geometry.
    pub fn set_tool(&mut self, tool: Tool) -> EditorResult<()> {
        if let Some(kind) = tool.shape_kind() {
            if !kind.has_geometry() {
                warn!("Refusing to switch to reserved tool {tool}");
                return Err(EditorError::UnsupportedTool(kind));
            }
        }

        let old = self.current_tool;
        self.current_tool = tool;
        if old != tool {
            info!("Tool changed: {old} -> {tool}");
            self.event_bus.emit(EditorEvent::ToolChanged { old, new: tool });
        }
        Ok(())
    }

    /// Selects a tool by its name, as stored by a tool picker.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvalidTool`] for names outside the tool set, leaving the
    /// current tool unchanged.
    pub fn set_tool_by_name(&mut self, name: &str) -> EditorResult<Tool> {
        let tool = name.parse::<Tool>().inspect_err(|err| warn!("{err}"))?;
        self.set_tool(tool)?;
        Ok(tool)
    }

    /// Handles a press at canvas coordinates `(x, y)`.
    ///
    /// With the select tool this picks the first shape under the pointer and starts
    /// moving it, or does nothing when the pointer is over empty canvas. With any other
    /// tool it appends a zero-size shape at the pointer and starts drawing it.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> EditorResult<()> {
        if !self.state.is_idle() {
            // The release of the previous drag never arrived
            warn!(
                "Pointer down while {}; ending the previous drag",
                self.mode().name()
            );
            self.pointer_up();
        }

        match self.current_tool.shape_kind() {
            None => {
                let Some(hit) = hit_test(&self.scene, pos2(x, y)) else {
                    debug!("Select at ({x}, {y}) hit nothing");
                    return Ok(());
                };
                let active = hit.clone();
                debug!("Selected shape {} ({})", active.id(), active.kind());
                self.transition_to(EditorState::Moving { active });
            }
            Some(kind) => {
                let id = self.scene.next_id();
                let shape = make_shape(&self.renderer, id, x, y, x, y, kind);
                self.scene.append(shape.clone())?;
                debug!("Created {kind} {id} at ({x}, {y})");
                self.event_bus.emit(EditorEvent::ShapeAdded { id });
                self.transition_to(EditorState::Drawing { active: shape });
            }
        }
        Ok(())
    }

    /// Handles pointer motion to canvas coordinates `(x, y)`.
    ///
    /// While drawing, the active shape's second anchor follows the pointer. While
    /// moving, the shape is translated so its first anchor sits at the pointer and its
    /// size is unchanged. Idle motion is ignored.
    ///
    /// # Errors
    ///
    /// Returns [`EditorError::InvariantViolation`] if the scene no longer holds the
    /// active shape's id, which means events were delivered out of order.
    pub fn pointer_move(&mut self, x: f32, y: f32) -> EditorResult<()> {
        let pos = pos2(x, y);
        let next = match &self.state {
            EditorState::Idle => return Ok(()),
            EditorState::Drawing { active } => active.with_end(&self.renderer, pos),
            EditorState::Moving { active } => active.moved_to(&self.renderer, pos),
        };

        let id = next.id();
        if let Err(err) = self.scene.replace(next.clone()) {
            error!("Pointer move while {}: {err}", self.mode().name());
            return Err(err);
        }
        self.event_bus.emit(EditorEvent::ShapeReplaced { id });

        if let Some(active) = self.state.active_shape_mut() {
            *active = next;
        }
        Ok(())
    }

    /// Ends any drag and returns to idle. Harmless when already idle.
    pub fn pointer_up(&mut self) {
        self.transition_to(EditorState::Idle);
    }

    /// Dispatches one translated input event
    pub fn handle_event(&mut self, event: &InputEvent) -> EditorResult<()> {
        match *event {
            InputEvent::PointerDown { position } => self.pointer_down(position.x, position.y),
            InputEvent::PointerMove { position } => self.pointer_move(position.x, position.y),
            InputEvent::PointerUp { .. } => {
                self.pointer_up();
                Ok(())
            }
        }
    }

    /// Drops every shape and any drag in progress
    pub fn clear_scene(&mut self) {
        self.transition_to(EditorState::Idle);
        self.scene.clear();
        info!("Scene cleared");
        self.event_bus.emit(EditorEvent::SceneCleared);
    }

    fn transition_to(&mut self, new_state: EditorState<R::Primitive>) {
        let old = self.state.mode();
        self.state = new_state;
        let new = self.state.mode();

        if old != new {
            debug!("Editor state: {} -> {}", old.name(), new.name());
            self.event_bus.emit(EditorEvent::StateChanged { old, new });
        }
    }
}
