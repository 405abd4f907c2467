//! Kommandozeilen-Argumente.

use std::path::PathBuf;

use clap::Parser;

use crate::shared::EditorOptions;

/// Kommandozeilen-Argumente für qpaint.
#[derive(Debug, Parser)]
#[command(name = "qpaint", version, about = "Minimaler Raster-Malbereich")]
pub struct Cli {
    /// Bilddatei, die beim Start geladen wird.
    pub image: Option<PathBuf>,

    /// Pfad zur TOML-Konfigurationsdatei.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Konfigurationspfad: explizit per `--config`, sonst neben der Executable.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(EditorOptions::config_path)
    }
}
