use crate::state::EditorMode;
use crate::tools::Tool;

/// Changes the presentation shell may want to react to
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorEvent {
    /// A new shape was appended to the scene
    ShapeAdded { id: usize },
    /// The shape with this id was swapped for a new value
    ShapeReplaced { id: usize },
    /// Every shape was dropped
    SceneCleared,
    StateChanged { old: EditorMode, new: EditorMode },
    ToolChanged { old: Tool, new: Tool },
}

impl EditorEvent {
    /// True for events that change what the canvas shows
    pub fn changes_scene(&self) -> bool {
        matches!(self, Self::ShapeAdded { .. } | Self::ShapeReplaced { .. } | Self::SceneCleared)
    }
}
