//! qpaint.
//!
//! Minimaler Raster-Malbereich mit egui: Zeichenfläche mit Strg+Mausrad-Zoom,
//! Werkzeug-Dock und Farbpalette.

use clap::Parser;
use eframe::egui;
use qpaint::{Cli, EditorOptions, EditorWindow};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        let cli = Cli::parse();

        log::info!("qpaint v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden, beim ersten Start mit Standardwerten anlegen
        let editor_options = EditorOptions::load_or_create(&cli.config_path());

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([editor_options.window_width, editor_options.window_height])
                .with_title("qpaint"),
            ..Default::default()
        };

        let window = EditorWindow::new(editor_options, cli.image);

        eframe::run_native("qpaint", options, Box::new(|_cc| Ok(Box::new(window))))
    }
}
