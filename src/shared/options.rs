//! Zentrale Konfiguration für qpaint.
//!
//! `EditorOptions` enthält alle über die TOML-Datei änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ── Kamera ──────────────────────────────────────────────────────────

/// Zoom-Faktor pro Mausrad-Schritt (mit gedrückter Strg-Taste).
pub const CAMERA_SCROLL_ZOOM_STEP: f32 = 1.25;
/// Multiplikator für das Scrollen ohne Modifier.
pub const SCROLL_PAN_SPEED: f32 = 1.0;

// ── Fenster & Panels ────────────────────────────────────────────────

/// Standard-Fensterbreite in logischen Pixeln.
pub const WINDOW_WIDTH: f32 = 1024.0;
/// Standard-Fensterhöhe in logischen Pixeln.
pub const WINDOW_HEIGHT: f32 = 768.0;
/// Kantenlänge der Werkzeug-Buttons.
pub const TOOL_BUTTON_SIZE: f32 = 30.0;
/// Kantenlänge einer Farbfläche im Palette-Raster.
pub const SWATCH_SIZE: f32 = 20.0;
/// Hintergrundfarbe der Zeichenfläche (RGBA: Dunkelgrau).
pub const CANVAS_BACKGROUND: [u8; 4] = [48, 48, 48, 255];

/// Dateiname der Optionen-Datei neben der Binary.
const CONFIG_FILE_NAME: &str = "qpaint.toml";

/// Alle konfigurierbaren Editor-Optionen.
/// Fehlende Felder in der TOML-Datei werden mit Standardwerten belegt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorOptions {
    // ── Kamera ──────────────────────────────────────────────────
    /// Zoom-Faktor pro Mausrad-Schritt (Herauszoomen: Kehrwert)
    pub camera_scroll_zoom_step: f32,
    /// Multiplikator für Scroll-Pan ohne Modifier
    pub scroll_pan_speed: f32,

    // ── Fenster ─────────────────────────────────────────────────
    pub window_width: f32,
    pub window_height: f32,

    // ── Panels ──────────────────────────────────────────────────
    /// Kantenlänge der Werkzeug-Buttons
    pub tool_button_size: f32,
    /// Kantenlänge der Farbflächen
    pub swatch_size: f32,
    /// Hintergrundfarbe der Zeichenfläche (RGBA)
    pub canvas_background: [u8; 4],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            camera_scroll_zoom_step: CAMERA_SCROLL_ZOOM_STEP,
            scroll_pan_speed: SCROLL_PAN_SPEED,
            window_width: WINDOW_WIDTH,
            window_height: WINDOW_HEIGHT,
            tool_button_size: TOOL_BUTTON_SIZE,
            swatch_size: SWATCH_SIZE,
            canvas_background: CANVAS_BACKGROUND,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<Self>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.validated()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Lädt Optionen. Fehlt die Datei, wird sie mit Standardwerten angelegt.
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            return Self::load_from_file(path);
        }

        let defaults = Self::default();
        if let Err(e) = defaults.save_to_file(path) {
            log::warn!("Standard-Optionen konnten nicht angelegt werden: {:#}", e);
        }
        defaults
    }

    /// Ersetzt ungültige Werte durch Standardwerte.
    fn validated(mut self) -> Self {
        let step = self.camera_scroll_zoom_step;
        if !step.is_finite() || step <= 0.0 {
            log::warn!(
                "Ungültiger camera_scroll_zoom_step {}, verwende {}",
                step,
                CAMERA_SCROLL_ZOOM_STEP
            );
            self.camera_scroll_zoom_step = CAMERA_SCROLL_ZOOM_STEP;
        }
        self
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Optionen nicht schreibbar: {}", path.display()))?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| PathBuf::from("qpaint"))
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(CONFIG_FILE_NAME)
    }

    /// Zoom-Faktor für einen Mausrad-Schritt in die angegebene Richtung.
    pub fn scroll_zoom_factor(&self, zoom_in: bool) -> f32 {
        if zoom_in {
            self.camera_scroll_zoom_step
        } else {
            1.0 / self.camera_scroll_zoom_step
        }
    }
}
