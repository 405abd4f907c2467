use crate::app::{AppCommand, AppIntent, AppState};
use std::path::PathBuf;

use super::map_intent_to_commands;

#[test]
fn startup_image_maps_to_load_then_center() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::StartupImageRequested {
            path: PathBuf::from("bild.png"),
        },
    );

    assert_eq!(commands.len(), 2);
    assert!(matches!(
        &commands[0],
        AppCommand::LoadCanvasImage { path } if path == &PathBuf::from("bild.png")
    ));
    assert!(matches!(commands[1], AppCommand::CenterCameraOnScene));
}

#[test]
fn camera_zoom_maps_to_zoom_command_with_focus() {
    let state = AppState::new();
    let focus = glam::Vec2::new(3.0, 4.0);

    let commands = map_intent_to_commands(
        &state,
        AppIntent::CameraZoom {
            factor: 1.25,
            focus_world: Some(focus),
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::ZoomCamera {
            factor,
            focus_world,
        } => {
            assert_eq!(factor, 1.25);
            assert_eq!(focus_world, Some(focus));
        }
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}

#[test]
fn viewport_resized_maps_to_set_viewport_size() {
    let state = AppState::new();

    let commands = map_intent_to_commands(
        &state,
        AppIntent::ViewportResized {
            size: [640.0, 480.0],
        },
    );

    assert_eq!(commands.len(), 1);
    match commands[0] {
        AppCommand::SetViewportSize { size } => assert_eq!(size, [640.0, 480.0]),
        ref other => panic!("Unerwarteter Command: {other:?}"),
    }
}
