//! Standard-Scrollverhalten ohne Modifier: verschiebt die Ansicht.

use super::ViewportContext;
use crate::app::AppIntent;

impl ViewportContext<'_> {
    /// Verschiebt die Kamera um das Scroll-Delta (Zoom bleibt unverändert).
    ///
    /// Bei gedrückter Strg-Taste wird nicht verschoben, das Mausrad zoomt dann.
    pub(crate) fn handle_default_scroll(&self, events: &mut Vec<AppIntent>) {
        let (scroll, ctrl) = self.ui.input(|i| (i.smooth_scroll_delta, i.modifiers.ctrl));
        if ctrl || scroll == egui::Vec2::ZERO {
            return;
        }

        let delta = scroll_to_pan_delta(
            glam::Vec2::new(scroll.x, scroll.y),
            self.camera.zoom,
            self.options.scroll_pan_speed,
        );
        events.push(AppIntent::CameraPan { delta });
    }
}

/// Screen-Scroll-Delta → Kamera-Delta in Szenen-Koordinaten.
fn scroll_to_pan_delta(scroll: glam::Vec2, zoom: f32, speed: f32) -> glam::Vec2 {
    -scroll * speed / zoom
}
