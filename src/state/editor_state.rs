//! The pointer-driven state machine behind the canvas.
//!
//! ```text
//!            pointer down, drawing tool           pointer move
//!        ┌───────────────────────────────► Drawing ◄──────┐
//!        │                                    │   └───────┘
//!        │             pointer up             │
//!      Idle ◄─────────────────────────────────┤
//!        │                                    │
//!        │   pointer down, select tool, hit   │   pointer move
//!        └───────────────────────────────► Moving ◄───────┐
//!                                                  └──────┘
//! ```
//!
//! A select-tool pointer-down that hits nothing stays in `Idle`, and pointer moves
//! in `Idle` are ignored.

use serde::{Deserialize, Serialize};

use crate::element::Shape;

/// The mode of the editor, without the shape it carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditorMode {
    #[default]
    Idle,
    Drawing,
    Moving,
}

impl EditorMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Drawing => "drawing",
            Self::Moving => "moving",
        }
    }
}

/// The current mode, plus a copy of the shape being drawn or moved.
///
/// The active shape is a snapshot, not a view into the scene. Every pointer move
/// builds a new shape from it, writes that into the scene, and then stores it here.
#[derive(Debug, Clone, PartialEq)]
pub enum EditorState<P> {
    /// No drag in progress
    Idle,
    /// Dragging out the second anchor of a freshly created shape
    Drawing { active: Shape<P> },
    /// Dragging an existing shape around by its first anchor
    Moving { active: Shape<P> },
}

impl<P> Default for EditorState<P> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<P> EditorState<P> {
    pub fn mode(&self) -> EditorMode {
        match self {
            Self::Idle => EditorMode::Idle,
            Self::Drawing { .. } => EditorMode::Drawing,
            Self::Moving { .. } => EditorMode::Moving,
        }
    }

    pub fn active_shape(&self) -> Option<&Shape<P>> {
        match self {
            Self::Idle => None,
            Self::Drawing { active } | Self::Moving { active } => Some(active),
        }
    }

    pub(crate) fn active_shape_mut(&mut self) -> Option<&mut Shape<P>> {
        match self {
            Self::Idle => None,
            Self::Drawing { active } | Self::Moving { active } => Some(active),
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
