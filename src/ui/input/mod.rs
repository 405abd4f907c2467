//! Viewport-Input-Handling: Mausrad → AppIntent.
//!
//! - `zoom`: Strg+Mausrad-Zoom auf Mausposition
//! - `scroll`: Standard-Scrollverhalten ohne Modifier (Pan)

mod scroll;
mod zoom;

use crate::app::{AppIntent, Camera2D};
use crate::shared::EditorOptions;

/// Bündelt die gemeinsamen Parameter für Viewport-Event-Verarbeitung.
pub(crate) struct ViewportContext<'a> {
    pub ui: &'a egui::Ui,
    pub response: &'a egui::Response,
    pub viewport_size: [f32; 2],
    pub camera: &'a Camera2D,
    pub options: &'a EditorOptions,
}

/// Sammelt Mausrad-Events über dem Viewport und gibt AppIntents zurück.
///
/// Strg+Mausrad zoomt, ohne Modifier greift das Standard-Scrollverhalten.
pub(crate) fn collect_wheel_intents(ctx: &ViewportContext) -> Vec<AppIntent> {
    let mut events = Vec::new();
    if !ctx.response.hovered() {
        return events;
    }

    ctx.handle_scroll_zoom(&mut events);
    ctx.handle_default_scroll(&mut events);

    events
}

/// Rechnet eine Bildschirmposition in Szenen-Koordinaten um.
pub(crate) fn screen_pos_to_world(
    pointer_pos: egui::Pos2,
    response: &egui::Response,
    viewport_size: [f32; 2],
    camera: &Camera2D,
) -> glam::Vec2 {
    let local = pointer_pos - response.rect.min;
    camera.screen_to_world(
        glam::Vec2::new(local.x, local.y),
        glam::Vec2::new(viewport_size[0], viewport_size[1]),
    )
}
