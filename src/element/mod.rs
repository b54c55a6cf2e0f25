use egui::{Pos2, Vec2, pos2};
use serde::{Deserialize, Serialize};

use crate::renderer::ShapeRenderer;

/// The closed set of drawable shape kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Line,
    Rectangle,
    /// Reserved. Has no drawing or hit-testing geometry.
    Freehand,
}

impl ShapeKind {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Freehand => "freehand",
        }
    }

    /// Whether shapes of this kind can be drawn and picked
    pub fn has_geometry(&self) -> bool {
        !matches!(self, Self::Freehand)
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One drawable object in the scene.
///
/// A `Shape` is an immutable value. Changing a shape means building a new one with
/// [`make_shape`] and replacing it in the [`Scene`](crate::scene::Scene) under the
/// same id, so copies held elsewhere never observe the change.
///
/// `P` is the render primitive produced by the [`ShapeRenderer`]; the editor stores
/// it but never looks inside.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape<P> {
    id: usize,
    kind: ShapeKind,
    start: Pos2,
    end: Pos2,
    primitive: P,
}

/// Builds a shape from its two anchor points.
///
/// For lines the anchors are the endpoints; for rectangles they are opposite corners in
/// any order. Nothing is validated or normalized: a rectangle dragged up and left has a
/// negative width and height, and NaN or off-canvas coordinates are stored verbatim.
pub fn make_shape<R: ShapeRenderer>(
    renderer: &R,
    id: usize,
    x1: f32,
    y1: f32,
    x2: f32,
    y2: f32,
    kind: ShapeKind,
) -> Shape<R::Primitive> {
    let start = pos2(x1, y1);
    let end = pos2(x2, y2);
    Shape {
        id,
        kind,
        start,
        end,
        primitive: renderer.primitive(kind, start, end),
    }
}

impl<P> Shape<P> {
    /// Creation-order identity, fixed for the life of the scene
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// First anchor point `(x1, y1)`
    pub fn start(&self) -> Pos2 {
        self.start
    }

    /// Second anchor point `(x2, y2)`
    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn x1(&self) -> f32 {
        self.start.x
    }

    pub fn y1(&self) -> f32 {
        self.start.y
    }

    pub fn x2(&self) -> f32 {
        self.end.x
    }

    pub fn y2(&self) -> f32 {
        self.end.y
    }

    /// Signed extent from the first anchor to the second
    pub fn size(&self) -> Vec2 {
        self.end - self.start
    }

    pub fn primitive(&self) -> &P {
        &self.primitive
    }

    /// Rebuilds this shape with a new second anchor, keeping id, kind and first anchor
    pub fn with_end<R>(&self, renderer: &R, end: Pos2) -> Shape<R::Primitive>
    where
        R: ShapeRenderer<Primitive = P>,
    {
        make_shape(
            renderer, self.id, self.start.x, self.start.y, end.x, end.y, self.kind,
        )
    }

    /// Rebuilds this shape translated so its first anchor sits at `origin`, keeping its size
    pub fn moved_to<R>(&self, renderer: &R, origin: Pos2) -> Shape<R::Primitive>
    where
        R: ShapeRenderer<Primitive = P>,
    {
        let size = self.size();
        make_shape(
            renderer,
            self.id,
            origin.x,
            origin.y,
            origin.x + size.x,
            origin.y + size.y,
            self.kind,
        )
    }
}
