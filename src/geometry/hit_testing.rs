use egui::Pos2;

use crate::element::{Shape, ShapeKind};
use crate::scene::Scene;

/// Maximum detour, in pixels, a point may add to a line segment and still count as on it
pub const LINE_HIT_TOLERANCE: f32 = 1.0;

/// Euclidean distance between two points
pub fn distance(a: Pos2, b: Pos2) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Tests whether `c` lies on the segment `a`-`b`.
///
/// This is a triangle-inequality slack test: the path `a -> c -> b` may be at most
/// `tolerance` longer than `a -> b`. It is not a perpendicular distance test, so the
/// accepted region is an ellipse with foci `a` and `b`, thinnest at the midpoint.
pub fn point_on_segment(a: Pos2, b: Pos2, c: Pos2, tolerance: f32) -> bool {
    let offset = distance(a, c) + distance(c, b) - distance(a, b);
    offset.abs() < tolerance
}

/// Tests whether `c` lies inside the closed box spanned by two opposite corners,
/// given in any order.
pub fn point_in_rectangle(corner1: Pos2, corner2: Pos2, c: Pos2) -> bool {
    let min_x = corner1.x.min(corner2.x);
    let max_x = corner1.x.max(corner2.x);
    let min_y = corner1.y.min(corner2.y);
    let max_y = corner1.y.max(corner2.y);

    c.x >= min_x && c.x <= max_x && c.y >= min_y && c.y <= max_y
}

/// Kind-appropriate containment test for a single shape
pub fn shape_contains<P>(shape: &Shape<P>, pos: Pos2) -> bool {
    match shape.kind() {
        ShapeKind::Rectangle => point_in_rectangle(shape.start(), shape.end(), pos),
        ShapeKind::Line => point_on_segment(shape.start(), shape.end(), pos, LINE_HIT_TOLERANCE),
        // Freehand has no geometry yet
        ShapeKind::Freehand => false,
    }
}

/// Returns the first shape, in ascending id order, containing `pos`.
///
/// When shapes overlap the oldest one wins. This is a linear scan; scenes are
/// edited by hand and stay small.
pub fn hit_test<P>(scene: &Scene<P>, pos: Pos2) -> Option<&Shape<P>> {
    scene.shapes().iter().find(|shape| shape_contains(shape, pos))
}
