#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod state;
pub mod tools;

pub use app::DiagramApp;
pub use element::{Shape, ShapeKind, make_shape};
pub use error::{EditorError, EditorResult};
pub use geometry::hit_test;
pub use input::{InputEvent, InputHandler};
pub use renderer::{Renderer, ShapeRenderer};
pub use scene::Scene;
pub use state::{EditorContext, EditorMode, EditorState};
pub use tools::Tool;
