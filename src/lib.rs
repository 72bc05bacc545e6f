#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod geometry;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod scene;
pub mod selection;
pub mod state;
pub mod tools;

pub use app::PlanApp;
pub use command::{Command, CommandError, CommandHistory, HistoryEntry};
pub use config::EditorConfig;
pub use element::{Element, ElementType};
pub use error::EditorError;
pub use input::{InputDispatcher, InputEvent, InputLocation};
pub use renderer::Renderer;
pub use scene::Scene;
pub use selection::SelectionManager;
pub use state::{EditorContext, EditorState};
pub use tools::{Tool, ToolType};
