use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::element::ShapeKind;
use crate::error::EditorError;

/// What a pointer-down on the canvas does: pick an existing shape, or start a new one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tool {
    Select,
    #[default]
    Line,
    Rectangle,
    /// Reserved for a future pen tool; the editor refuses to switch to it
    Freehand,
}

impl Tool {
    /// Tools offered in the tool picker, in display order
    pub const AVAILABLE: [Tool; 3] = [Tool::Select, Tool::Line, Tool::Rectangle];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::Line => "line",
            Self::Rectangle => "rectangle",
            Self::Freehand => "freehand",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Select => "Select",
            Self::Line => "Line",
            Self::Rectangle => "Rectangle",
            Self::Freehand => "Freehand",
        }
    }

    /// The kind of shape a pointer-down creates, or `None` for the select tool
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        match self {
            Self::Select => None,
            Self::Line => Some(ShapeKind::Line),
            Self::Rectangle => Some(ShapeKind::Rectangle),
            Self::Freehand => Some(ShapeKind::Freehand),
        }
    }
}

impl std::fmt::Display for Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tool {
    type Err = EditorError;

    /// Tool names are matched exactly; `"Line"` is not `"line"`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(Self::Select),
            "line" => Ok(Self::Line),
            "rectangle" => Ok(Self::Rectangle),
            "freehand" => Ok(Self::Freehand),
            other => Err(EditorError::InvalidTool(other.to_owned())),
        }
    }
}

impl From<ShapeKind> for Tool {
    fn from(kind: ShapeKind) -> Self {
        match kind {
            ShapeKind::Line => Self::Line,
            ShapeKind::Rectangle => Self::Rectangle,
            ShapeKind::Freehand => Self::Freehand,
        }
    }
}
