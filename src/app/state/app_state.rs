use crate::core::{ColorGrid, Scene, ToolTable};
use crate::shared::EditorOptions;

use super::{UiState, ViewState};

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Szene der Zeichenfläche (null oder eine Pixmap)
    pub scene: Scene,
    /// View-State
    pub view: ViewState,
    /// UI-State
    pub ui: UiState,
    /// Werkzeugliste des Tools-Panels (nach dem Start unveränderlich)
    pub tools: ToolTable,
    /// Farbraster des Palette-Panels (nach dem Start unveränderlich)
    pub palette: ColorGrid,
    /// Laufzeit-Optionen (Zoom-Schritt, Panel-Größen, Farben)
    pub options: EditorOptions,
}

impl AppState {
    /// Erstellt einen neuen, leeren App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// Erstellt einen leeren App-State mit den übergebenen Optionen
    pub fn with_options(options: EditorOptions) -> Self {
        Self {
            scene: Scene::new(),
            view: ViewState::new(),
            ui: UiState::new(),
            tools: ToolTable::default(),
            palette: ColorGrid::default(),
            options,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
