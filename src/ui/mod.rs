//! UI-Komponenten: Hauptfenster, Zeichenfläche, Docks, Status-Bar.

pub mod draw_area;
mod input;
/// UI-Layer mit egui
///
/// Die Docks rendern nur lesend aus dem AppState, die Zeichenfläche liefert
/// AppIntents für Zoom, Pan und Viewport-Größe.
pub mod palette_dock;
pub mod status;
pub mod tools_dock;
pub mod window;

pub use draw_area::DrawAreaView;
pub use palette_dock::render_palette_dock;
pub use status::render_status_bar;
pub use tools_dock::render_tools_dock;
pub use window::EditorWindow;
