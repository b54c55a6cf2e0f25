use thiserror::Error;

use crate::element::ShapeKind;

/// Errors surfaced by the editor to whoever feeds it tool changes and pointer events
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EditorError {
    /// The tool name is not one of `select`, `line`, `rectangle` or `freehand`
    #[error("Unknown tool: {0:?}")]
    InvalidTool(String),

    /// The tool names a shape kind that has no geometry yet
    #[error("Tool {0} is reserved and cannot draw yet")]
    UnsupportedTool(ShapeKind),

    /// Events were delivered in an order the state machine cannot have produced
    #[error("Editor invariant violated: {0}")]
    InvariantViolation(String),
}

/// Result type for editor operations
pub type EditorResult<T> = Result<T, EditorError>;
