//! qpaint Library.
//! Core-Funktionalität als Library exportiert für Tests und Wiederverwendung.

pub mod app;
pub mod cli;
pub mod core;
pub mod shared;
pub mod ui;

pub use app::{AppCommand, AppController, AppIntent, AppState, UiState, ViewState};
pub use cli::Cli;
pub use core::{Camera2D, ColorGrid, Pixmap, Scene, Swatch, Tool, ToolKind, ToolTable};
pub use shared::EditorOptions;
pub use ui::{DrawAreaView, EditorWindow};
