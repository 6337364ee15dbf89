use bevy::prelude::*;
use bevy::window::PresentMode;

/// Platform window settings: canvas-attached with parent-fit resizing on
/// WASM, a titled window on native, vsync everywhere.
pub fn create_window_config() -> Window {
    #[cfg(target_arch = "wasm32")]
    {
        Window {
            canvas: Some("#bevy".into()),
            fit_canvas_to_parent: true,
            prevent_default_event_handling: false,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        Window {
            title: "point stream viewer".into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
