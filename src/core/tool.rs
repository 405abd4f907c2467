//! Werkzeug-Tabelle für das Tools-Panel.
//!
//! Die Tabelle ist statische Konfiguration; daraus werden beim Aufbau des
//! Panel-Modells unveränderliche `Tool`-Einträge erzeugt.

use std::fmt;
use std::path::PathBuf;

/// Schlüssel eines Werkzeugs in der Tabelle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Pinsel
    Brush,
    /// Radierer
    Eraser,
}

/// Tastenkürzel aus einer einzelnen Taste
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut(char);

impl Shortcut {
    /// Erstellt ein Kürzel für eine einzelne Taste
    pub const fn key(key: char) -> Self {
        Self(key)
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_ascii_uppercase())
    }
}

/// Statischer Tabelleneintrag eines Werkzeugs
#[derive(Debug, Clone, Copy)]
pub struct ToolSpec {
    pub kind: ToolKind,
    pub name: &'static str,
    /// Icon-Pfad (derzeit für alle Werkzeuge ungesetzt)
    pub icon: Option<&'static str>,
    pub shortcut: Option<Shortcut>,
    pub help_text: Option<&'static str>,
}

/// Verfügbare Werkzeuge in Anzeigereihenfolge
pub const AVAILABLE_TOOLS: [ToolSpec; 2] = [
    ToolSpec {
        kind: ToolKind::Brush,
        name: "Paintbrush",
        icon: None,
        shortcut: Some(Shortcut::key('B')),
        help_text: Some("Left click to draw."),
    },
    ToolSpec {
        kind: ToolKind::Eraser,
        name: "Eraser",
        icon: None,
        shortcut: Some(Shortcut::key('E')),
        help_text: Some("Left click to erase."),
    },
];

/// Unveränderliches Werkzeug mit abgeleitetem Tooltip
#[derive(Debug, Clone, PartialEq)]
pub struct Tool {
    kind: ToolKind,
    name: String,
    icon: Option<PathBuf>,
    tooltip: String,
}

impl Tool {
    /// Baut ein Werkzeug aus einem Tabelleneintrag und setzt den Tooltip zusammen.
    pub fn new(spec: &ToolSpec) -> Self {
        Self {
            kind: spec.kind,
            name: spec.name.to_string(),
            icon: spec.icon.map(PathBuf::from),
            tooltip: compose_tooltip(spec.name, spec.shortcut, spec.help_text),
        }
    }

    pub fn kind(&self) -> ToolKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn icon(&self) -> Option<&PathBuf> {
        self.icon.as_ref()
    }

    pub fn tooltip(&self) -> &str {
        &self.tooltip
    }
}

/// Name, optional "Shortcut key: X" und optional Hilfetext (durch Leerzeile getrennt).
fn compose_tooltip(name: &str, shortcut: Option<Shortcut>, help_text: Option<&str>) -> String {
    let mut tooltip = name.to_string();
    if let Some(shortcut) = shortcut {
        tooltip.push_str(&format!("\nShortcut key: {}", shortcut));
    }
    if let Some(help) = help_text {
        tooltip.push_str("\n\n");
        tooltip.push_str(help);
    }
    tooltip
}

/// Geordnete, nach dem Aufbau unveränderliche Werkzeugliste des Tools-Panels
#[derive(Debug, Clone)]
pub struct ToolTable {
    tools: Vec<Tool>,
}

impl ToolTable {
    /// Baut die Werkzeugliste aus statischen Tabelleneinträgen (Reihenfolge bleibt erhalten).
    pub fn from_specs(specs: &[ToolSpec]) -> Self {
        Self {
            tools: specs.iter().map(Tool::new).collect(),
        }
    }

    /// Alle Werkzeuge in Anzeigereihenfolge
    pub fn entries(&self) -> &[Tool] {
        &self.tools
    }

}

impl Default for ToolTable {
    fn default() -> Self {
        Self::from_specs(&AVAILABLE_TOOLS)
    }
}
