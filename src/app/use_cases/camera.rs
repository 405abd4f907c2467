//! Use-Case-Funktionen für Kamera-Steuerung.

use crate::app::AppState;

/// Verschiebt die Kamera basierend auf einem Delta.
pub fn pan(state: &mut AppState, delta: glam::Vec2) {
    state.view.camera.pan(delta);
}

/// Zoomt auf einen optionalen Fokuspunkt (Mausposition) hin.
///
/// Falls `focus_world` angegeben ist, bleibt der Szenenpunkt unter
/// der Maus nach dem Zoom stabil an derselben Bildschirmposition.
pub fn zoom_towards(state: &mut AppState, factor: f32, focus_world: Option<glam::Vec2>) {
    match focus_world {
        Some(focus) => state.view.camera.zoom_towards(factor, focus),
        None => state.view.camera.zoom_by(factor),
    }
    log::debug!("Zoom: {:.4}", state.view.camera.zoom);
}

/// Zentriert die Kamera auf die Mitte der Szene.
///
/// Keine Operation wenn die Szene leer ist oder nur eine Null-Pixmap enthält.
pub fn center_on_scene(state: &mut AppState) {
    let (width, height) = state.scene.size();
    if width == 0 || height == 0 {
        return;
    }

    let center = glam::Vec2::new(width as f32 / 2.0, height as f32 / 2.0);
    state.view.camera.look_at(center);
    log::info!(
        "Szene {}x{}, Kamera zentriert auf ({:.1}, {:.1})",
        width,
        height,
        center.x,
        center.y
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Pixmap;
    use approx::assert_relative_eq;
    use image::{DynamicImage, RgbaImage};

    #[test]
    fn zoom_in_multiplies_by_step() {
        let mut state = AppState::new();

        zoom_towards(&mut state, 1.25, None);

        assert_relative_eq!(state.view.camera.zoom, 1.25);
    }

    #[test]
    fn zoom_in_then_out_returns_to_original() {
        let mut state = AppState::new();
        let original = state.view.camera.zoom;

        zoom_towards(&mut state, 1.25, None);
        zoom_towards(&mut state, 1.0 / 1.25, None);

        assert!((state.view.camera.zoom - original).abs() < 1e-6);
    }

    #[test]
    fn pan_moves_camera_position() {
        let mut state = AppState::new();

        pan(&mut state, glam::Vec2::new(10.0, -5.0));

        assert_eq!(state.view.camera.position, glam::Vec2::new(10.0, -5.0));
    }

    #[test]
    fn zoom_towards_point_moves_camera_towards_focus() {
        let mut state = AppState::new();
        let focus = glam::Vec2::new(100.0, 50.0);

        zoom_towards(&mut state, 2.0, Some(focus));

        assert_relative_eq!(state.view.camera.position.x, 50.0);
        assert_relative_eq!(state.view.camera.position.y, 25.0);
    }

    #[test]
    fn center_on_scene_targets_image_center() {
        let mut state = AppState::new();
        state.scene.add_pixmap(Pixmap::from_image(DynamicImage::ImageRgba8(
            RgbaImage::new(200, 100),
        )));

        center_on_scene(&mut state);

        assert_eq!(state.view.camera.position, glam::Vec2::new(100.0, 50.0));
    }

    #[test]
    fn center_on_empty_scene_keeps_camera() {
        let mut state = AppState::new();
        state.view.camera.look_at(glam::Vec2::new(7.0, 8.0));

        center_on_scene(&mut state);

        assert_eq!(state.view.camera.position, glam::Vec2::new(7.0, 8.0));
    }
}
