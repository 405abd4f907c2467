use std::path::PathBuf;

/// UI-bezogener Anwendungszustand
#[derive(Default)]
pub struct UiState {
    /// Pfad des zuletzt angeforderten Bildes
    pub image_path: Option<PathBuf>,
    /// Statusnachricht für die Status-Bar (z.B. Ladefehler)
    pub status_message: Option<String>,
}

impl UiState {
    /// Erstellt einen leeren UI-Zustand.
    pub fn new() -> Self {
        Self {
            image_path: None,
            status_message: None,
        }
    }
}
