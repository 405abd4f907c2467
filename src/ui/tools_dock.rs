//! Werkzeug-Dock am linken Fensterrand.

use crate::app::AppState;
use crate::core::Tool;

/// Titel des Docks.
pub const TOOLS_DOCK_TITLE: &str = "Tools";

/// Beschriftung der Werkzeug-Buttons solange keine Icons hinterlegt sind.
pub const TOOL_BUTTON_LABEL: &str = "X";

/// Rendert die Werkzeugliste als senkrechte, oben ausgerichtete Button-Spalte.
///
/// Klicks lösen keine Aktion aus.
pub fn render_tools_dock(ctx: &egui::Context, state: &AppState) {
    let button_size = egui::vec2(state.options.tool_button_size, state.options.tool_button_size);

    egui::SidePanel::left("tools_dock")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading(TOOLS_DOCK_TITLE);
            ui.separator();

            ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                for tool in state.tools.entries() {
                    ui.add_sized(button_size, tool_button(tool))
                        .on_hover_text(tool.tooltip());
                }
            });
        });
}

fn tool_button(tool: &Tool) -> egui::Button<'static> {
    // Icon-Pfade sind derzeit nie gesetzt, daher immer die Platzhalter-Beschriftung
    if let Some(icon) = tool.icon() {
        log::debug!("Icon {} für {} wird nicht geladen", icon.display(), tool.name());
    }
    egui::Button::new(TOOL_BUTTON_LABEL)
}
