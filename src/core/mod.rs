//! Core-Domänentypen: Kamera, Szene, Pixmap, Werkzeug- und Farbtabellen.

pub mod camera;
pub mod palette;
pub mod pixmap;
pub mod scene;
pub mod tool;

pub use camera::Camera2D;
pub use palette::{ColorGrid, Swatch, DEFAULT_COLORS};
pub use pixmap::Pixmap;
pub use scene::Scene;
pub use tool::{Shortcut, Tool, ToolKind, ToolSpec, ToolTable, AVAILABLE_TOOLS};
