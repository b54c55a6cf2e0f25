use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas coordinates: origin at the canvas top-left, unclamped
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved while the press that started on the canvas is held
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp { position: Pos2 },
}

impl InputEvent {
    pub fn position(&self) -> Pos2 {
        match self {
            Self::PointerDown { position }
            | Self::PointerMove { position }
            | Self::PointerUp { position } => *position,
        }
    }
}

/// One frame's worth of primary-button pointer state, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSample {
    pub position: Option<Pos2>,
    pub pressed: bool,
    pub released: bool,
}

/// Converts raw egui pointer input into canvas-relative [`InputEvent`]s.
///
/// Only the primary button is tracked. A drag must start inside the canvas rect, but
/// once started its moves and release are reported wherever the pointer goes.
#[derive(Debug, Clone, Default)]
pub struct InputHandler {
    last_position: Option<Pos2>,
    dragging: bool,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a press that began on the canvas is still held
    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Reads this frame's pointer state from egui and translates it
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let sample = ctx.input(|input| PointerSample {
            position: input.pointer.latest_pos(),
            pressed: input.pointer.button_pressed(PointerButton::Primary),
            released: input.pointer.button_released(PointerButton::Primary),
        });
        self.translate(sample, canvas_rect)
    }

    /// Translates one sample. Within a frame, events come out as down, move, up.
    pub fn translate(&mut self, sample: PointerSample, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();
        let Some(pos) = sample.position.or(self.last_position) else {
            return events;
        };
        let to_canvas = |p: Pos2| (p - canvas_rect.min).to_pos2();

        if sample.pressed && !self.dragging && canvas_rect.contains(pos) {
            self.dragging = true;
            events.push(InputEvent::PointerDown {
                position: to_canvas(pos),
            });
        } else if self.dragging && Some(pos) != self.last_position {
            events.push(InputEvent::PointerMove {
                position: to_canvas(pos),
            });
        }

        if sample.released && self.dragging {
            self.dragging = false;
            events.push(InputEvent::PointerUp {
                position: to_canvas(pos),
            });
        }

        self.last_position = Some(pos);
        events
    }
}
