//! Farbpaletten-Dock am rechten Fensterrand.

use crate::app::AppState;
use crate::core::Swatch;

/// Titel des Docks.
pub const PALETTE_DOCK_TITLE: &str = "Palette";

/// Rendert das Farbraster: randlose, gleich große Felder ohne Abstand.
///
/// Klicks lösen keine Aktion aus.
pub fn render_palette_dock(ctx: &egui::Context, state: &AppState) {
    let cell_size = egui::vec2(state.options.swatch_size, state.options.swatch_size);
    let grid = &state.palette;

    egui::SidePanel::right("palette_dock")
        .resizable(false)
        .show(ctx, |ui| {
            ui.heading(PALETTE_DOCK_TITLE);
            ui.separator();

            egui::Grid::new("color_grid")
                .spacing([0.0, 0.0])
                .min_col_width(state.options.swatch_size)
                .min_row_height(state.options.swatch_size)
                .show(ui, |ui| {
                    for row in 0..grid.row_count() {
                        for column in 0..grid.column_count() {
                            if let Some(swatch) = grid.swatch(row, column) {
                                ui.add_sized(cell_size, swatch_button(swatch));
                            }
                        }
                        ui.end_row();
                    }
                });
        });
}

/// Farbe eines Feldes als egui-Farbe.
pub fn swatch_color(swatch: &Swatch) -> egui::Color32 {
    let [r, g, b] = swatch.rgb();
    egui::Color32::from_rgb(r, g, b)
}

fn swatch_button(swatch: &Swatch) -> egui::Button<'static> {
    egui::Button::new("")
        .fill(swatch_color(swatch))
        .stroke(egui::Stroke::NONE)
        .corner_radius(egui::CornerRadius::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ColorGrid;

    /// Rendert das Dock einmal und liefert alle Rechtecke mit Feldgröße.
    fn rendered_swatch_rects(state: &AppState) -> Vec<(egui::Color32, egui::Rect)> {
        let ctx = egui::Context::default();
        let input = egui::RawInput {
            screen_rect: Some(egui::Rect::from_min_size(
                egui::Pos2::ZERO,
                egui::vec2(800.0, 600.0),
            )),
            ..Default::default()
        };
        let output = ctx.run(input, |ctx| render_palette_dock(ctx, state));

        let size = state.options.swatch_size;
        let mut rects = Vec::new();
        let mut stack: Vec<egui::Shape> = output.shapes.into_iter().map(|c| c.shape).collect();
        while let Some(shape) = stack.pop() {
            match shape {
                egui::Shape::Vec(shapes) => stack.extend(shapes),
                egui::Shape::Rect(r)
                    if (r.rect.width() - size).abs() < 0.5
                        && (r.rect.height() - size).abs() < 0.5 =>
                {
                    rects.push((r.fill, r.rect));
                }
                _ => {}
            }
        }
        rects
    }

    fn rect_of(rects: &[(egui::Color32, egui::Rect)], color: egui::Color32) -> egui::Rect {
        rects
            .iter()
            .find(|(fill, _)| *fill == color)
            .map(|(_, rect)| *rect)
            .expect("Farbfeld sollte gezeichnet werden")
    }

    #[test]
    fn rendered_swatches_touch_without_gaps() {
        let state = AppState::new();
        let rects = rendered_swatch_rects(&state);

        let white = rect_of(&rects, egui::Color32::from_rgb(0xFF, 0xFF, 0xFF));
        let black = rect_of(&rects, egui::Color32::from_rgb(0x00, 0x00, 0x00));
        let gray = rect_of(&rects, egui::Color32::from_rgb(0x80, 0x80, 0x80));
        let dark = rect_of(&rects, egui::Color32::from_rgb(0x40, 0x40, 0x40));

        // Zeile 0: weiß | schwarz, Zeile 1: grau | dunkelgrau
        assert!((black.min.x - white.max.x).abs() < 0.5);
        assert!((dark.min.x - gray.max.x).abs() < 0.5);
        assert!((gray.min.y - white.max.y).abs() < 0.5);
        assert!((dark.min.y - black.max.y).abs() < 0.5);
        assert!((white.min.x - gray.min.x).abs() < 0.5);
    }

    #[test]
    fn default_grid_maps_to_expected_colors() {
        let grid = ColorGrid::default();
        let colors: Vec<egui::Color32> = grid.cells().map(|(_, _, s)| swatch_color(s)).collect();

        assert_eq!(
            colors,
            vec![
                egui::Color32::from_rgb(0xFF, 0xFF, 0xFF),
                egui::Color32::from_rgb(0x00, 0x00, 0x00),
                egui::Color32::from_rgb(0x80, 0x80, 0x80),
                egui::Color32::from_rgb(0x40, 0x40, 0x40),
            ]
        );
    }
}
