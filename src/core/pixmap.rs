//! Pixmap: dekodiertes Rasterbild für die Zeichenfläche.

use anyhow::{Context, Result};
use image::{DynamicImage, ImageReader, RgbaImage};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Dekodiertes RGBA-Bild oder Null-Pixmap (0×0, ohne Pixeldaten).
#[derive(Debug, Clone, Default)]
pub struct Pixmap {
    image: Option<RgbaImage>,
}

impl Pixmap {
    /// Lädt ein Bild aus einer Datei.
    ///
    /// Unterstützte Formate: PNG, JPEG, BMP, GIF
    pub fn load(path: &Path) -> Result<Self> {
        // Zuerst Erkennung anhand der Dateiendung, danach anhand der Magic Bytes
        let image = match image::open(path) {
            Ok(img) => img,
            Err(ext_err) => {
                log::debug!(
                    "Format-Erkennung via Dateiendung fehlgeschlagen für '{}': {}",
                    path.display(),
                    ext_err
                );
                let file = File::open(path)
                    .with_context(|| format!("Datei nicht lesbar: {}", path.display()))?;
                ImageReader::new(BufReader::new(file))
                    .with_guessed_format()
                    .with_context(|| format!("Format-Erkennung fehlgeschlagen: {}", path.display()))?
                    .decode()
                    .with_context(|| format!("Bild konnte nicht dekodiert werden: {}", path.display()))?
            }
        };

        Ok(Self::from_image(image))
    }

    /// Erstellt eine Pixmap aus einem bereits dekodierten Bild.
    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: Some(image.to_rgba8()),
        }
    }

    /// Null-Pixmap ohne Inhalt (Ergebnis eines fehlgeschlagenen Ladevorgangs).
    pub fn null() -> Self {
        Self { image: None }
    }

    /// `true`, wenn keine Pixeldaten vorhanden sind.
    pub fn is_null(&self) -> bool {
        self.image.is_none()
    }

    /// Breite und Höhe in Pixeln (0×0 bei Null-Pixmap).
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.as_ref().map_or((0, 0), |img| img.dimensions())
    }

    /// RGBA-Pixeldaten, falls vorhanden.
    pub fn rgba(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }
}
