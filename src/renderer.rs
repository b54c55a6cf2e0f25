use egui::{Color32, Painter, Pos2, Rect, Stroke};
use serde::{Deserialize, Serialize};

use crate::element::ShapeKind;
use crate::scene::Scene;

/// Turns a shape description into something a backend can draw.
///
/// The editor calls this every time a shape's anchors change and stores the result
/// alongside the shape without inspecting it.
pub trait ShapeRenderer {
    type Primitive: Clone;

    fn primitive(&self, kind: ShapeKind, start: Pos2, end: Pos2) -> Self::Primitive;
}

/// Headless renderer whose primitive is just the kind and the two anchors
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorRenderer;

impl ShapeRenderer for AnchorRenderer {
    type Primitive = (ShapeKind, Pos2, Pos2);

    fn primitive(&self, kind: ShapeKind, start: Pos2, end: Pos2) -> Self::Primitive {
        (kind, start, end)
    }
}

/// Stroke settings for shapes drawn on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasStyle {
    pub stroke_width: f32,
    pub stroke_color: Color32,
    pub background: Color32,
}

impl Default for CanvasStyle {
    fn default() -> Self {
        Self {
            stroke_width: 2.0,
            stroke_color: Color32::BLACK,
            background: Color32::WHITE,
        }
    }
}

/// Builds egui shapes in canvas coordinates and paints a scene of them
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    style: CanvasStyle,
}

impl Renderer {
    pub fn new(style: CanvasStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> CanvasStyle {
        self.style
    }

    /// Style changes apply to primitives built after the call
    pub fn set_style(&mut self, style: CanvasStyle) {
        self.style = style;
    }

    /// Paints the canvas background and every shape, offset to the canvas origin
    pub fn render(&self, painter: &Painter, scene: &Scene<egui::Shape>, rect: Rect) {
        painter.rect_filled(rect, 0.0, self.style.background);

        let offset = rect.min.to_vec2();
        for shape in scene.shapes() {
            let mut primitive = shape.primitive().clone();
            primitive.translate(offset);
            painter.add(primitive);
        }
    }
}

impl ShapeRenderer for Renderer {
    type Primitive = egui::Shape;

    fn primitive(&self, kind: ShapeKind, start: Pos2, end: Pos2) -> egui::Shape {
        let stroke = Stroke::new(self.style.stroke_width, self.style.stroke_color);
        match kind {
            ShapeKind::Line => egui::Shape::line_segment([start, end], stroke),
            ShapeKind::Rectangle => {
                // Width and height may be negative; egui wants an ordered rect
                let size = end - start;
                let rect = Rect::from_two_pos(start, start + size);
                egui::Shape::rect_stroke(rect, 0.0, stroke)
            }
            ShapeKind::Freehand => egui::Shape::Noop,
        }
    }
}
