#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod background;
pub mod brush;
pub mod command;
pub mod config;
pub mod document;
pub mod error;
pub mod gesture;
pub mod input;
pub mod panels;
pub mod point;
pub mod renderer;
pub mod state;
pub mod texture_manager;

pub use app::DrawingBoardApp;
pub use background::BackgroundSelector;
pub use brush::BrushSettings;
pub use command::{Command, CommandHistory};
pub use config::BoardConfig;
pub use document::Document;
pub use error::{BoardError, BoardResult};
pub use gesture::{GestureController, GestureState};
pub use input::{InputEvent, InputHandler, InputLocation};
pub use point::Point;
pub use renderer::{RasterSurface, Renderer, Surface};
pub use state::BoardState;
