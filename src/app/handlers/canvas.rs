//! Handler für den Szeneninhalt der Zeichenfläche.

use crate::app::use_cases;
use crate::app::AppState;
use std::path::PathBuf;

/// Lädt ein Bild als einzigen Szeneninhalt.
pub fn load_image(state: &mut AppState, path: PathBuf) {
    use_cases::canvas::load_image(state, path);
}
