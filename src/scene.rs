use crate::element::Shape;
use crate::error::{EditorError, EditorResult};

/// The append-ordered collection of shapes on the canvas.
///
/// A shape's id equals its index: shapes are only appended, never removed, and
/// replacing a shape keeps it in its slot.
#[derive(Debug, Clone)]
pub struct Scene<P> {
    shapes: Vec<Shape<P>>,
    revision: u64,
}

impl<P> Default for Scene<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> Scene<P> {
    pub fn new() -> Self {
        Self {
            shapes: Vec::new(),
            revision: 0,
        }
    }

    /// Id the next appended shape must carry
    pub fn next_id(&self) -> usize {
        self.shapes.len()
    }

    /// Appends a shape whose id is [`Scene::next_id`], returning that id
    pub fn append(&mut self, shape: Shape<P>) -> EditorResult<usize> {
        let id = self.next_id();
        if shape.id() != id {
            return Err(EditorError::InvariantViolation(format!(
                "appended shape has id {} but the next id is {}",
                shape.id(),
                id
            )));
        }

        self.shapes.push(shape);
        self.revision += 1;
        Ok(id)
    }

    /// Swaps in a new value for the shape with the same id and returns the old one
    pub fn replace(&mut self, shape: Shape<P>) -> EditorResult<Shape<P>> {
        let id = shape.id();
        let slot = self.shapes.get_mut(id).ok_or_else(|| {
            EditorError::InvariantViolation(format!("no shape with id {id} to replace"))
        })?;

        let old = std::mem::replace(slot, shape);
        self.revision += 1;
        Ok(old)
    }

    pub fn get(&self, id: usize) -> Option<&Shape<P>> {
        self.shapes.get(id)
    }

    /// All shapes in creation order
    pub fn shapes(&self) -> &[Shape<P>] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Bumped on every mutation; lets a renderer skip unchanged frames
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn clear(&mut self) {
        if !self.shapes.is_empty() {
            self.shapes.clear();
            self.revision += 1;
        }
    }
}
