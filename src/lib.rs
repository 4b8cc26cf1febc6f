#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod components;
pub mod config;
pub mod document;
pub mod error;
pub mod export;
pub mod file_handler;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod state;
pub mod sticker;
pub mod stroke;
pub mod tools;
pub mod util;

pub use app::SketchApp;
pub use command::{Command, CommandHistory, PendingCommand};
pub use config::SketchConfig;
pub use document::Document;
pub use error::{SketchError, SketchResult};
pub use input::{InputEvent, InputHandler, PointerSnapshot};
pub use renderer::{Renderer, Surface};
pub use state::EditorState;
pub use sticker::Sticker;
pub use stroke::Stroke;
pub use tools::{Tool, ToolPalette, ToolType};
