//! Strg+Mausrad-Zoom auf Mausposition.

use super::{screen_pos_to_world, ViewportContext};
use crate::app::AppIntent;
use crate::shared::EditorOptions;

impl ViewportContext<'_> {
    /// Erzeugt pro Strg+Mausrad-Schritt einen Zoom-Intent auf die Mausposition.
    pub(crate) fn handle_scroll_zoom(&self, events: &mut Vec<AppIntent>) {
        let wheel_steps: Vec<(f32, bool)> = self.ui.input(|i| {
            i.events
                .iter()
                .filter_map(|event| match event {
                    egui::Event::MouseWheel {
                        delta, modifiers, ..
                    } => Some((delta.y, modifiers.ctrl)),
                    _ => None,
                })
                .collect()
        });

        let focus_world = self
            .response
            .hover_pos()
            .map(|pos| screen_pos_to_world(pos, self.response, self.viewport_size, self.camera));

        for (delta_y, ctrl) in wheel_steps {
            if let Some(factor) = wheel_zoom_factor(delta_y, ctrl, self.options) {
                events.push(AppIntent::CameraZoom {
                    factor,
                    focus_world,
                });
            }
        }
    }
}

/// Zoom-Faktor für ein Mausrad-Event.
///
/// Nur mit gedrückter Strg-Taste (auch unter macOS Control, nicht Cmd).
/// Jedes Delta `<= 0` zoomt heraus.
pub(crate) fn wheel_zoom_factor(delta_y: f32, ctrl: bool, options: &EditorOptions) -> Option<f32> {
    if !ctrl {
        return None;
    }
    Some(options.scroll_zoom_factor(delta_y > 0.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_delta_with_modifier_zooms_in() {
        let opts = EditorOptions::default();
        for delta in [0.1, 1.0, 50.0, 120.0] {
            assert_eq!(wheel_zoom_factor(delta, true, &opts), Some(1.25));
        }
    }

    #[test]
    fn negative_delta_with_modifier_zooms_out() {
        let opts = EditorOptions::default();
        for delta in [-0.1, -1.0, -120.0] {
            assert_eq!(wheel_zoom_factor(delta, true, &opts), Some(1.0 / 1.25));
        }
    }

    #[test]
    fn without_modifier_no_zoom() {
        let opts = EditorOptions::default();
        assert_eq!(wheel_zoom_factor(120.0, false, &opts), None);
        assert_eq!(wheel_zoom_factor(-120.0, false, &opts), None);
    }

    #[test]
    fn horizontal_only_wheel_with_modifier_zooms_out() {
        let opts = EditorOptions::default();
        assert_eq!(wheel_zoom_factor(0.0, true, &opts), Some(1.0 / 1.25));
    }
}
