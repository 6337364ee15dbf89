use bevy::input::mouse::{MouseMotion, MouseWheel};
use bevy::prelude::*;

const ROTATE_SENSITIVITY: f32 = 0.005;
const ZOOM_STEP: f32 = 0.1;

/// Orbit camera state around a fixed focus point.
#[derive(Resource)]
pub struct ViewportCamera {
    pub focus_point: Vec3,
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

impl Default for ViewportCamera {
    fn default() -> Self {
        Self {
            focus_point: Vec3::ZERO,
            distance: 20.0,
            yaw: 0.0,
            pitch: -0.3,
            min_distance: 1.0,
            max_distance: 500.0,
        }
    }
}

impl ViewportCamera {
    /// Camera transform for the current orbit state.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let offset = rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(self.focus_point + offset)
            .looking_at(self.focus_point, Vec3::Y)
    }

    fn zoom(&mut self, steps: f32) {
        self.distance =
            (self.distance * (1.0 - steps * ZOOM_STEP)).clamp(self.min_distance, self.max_distance);
    }
}

/// Drag with the left button to orbit, scroll to zoom.
pub fn camera_controller(
    mut camera_state: ResMut<ViewportCamera>,
    mut motion_events: EventReader<MouseMotion>,
    mut wheel_events: EventReader<MouseWheel>,
    mouse_button: Res<ButtonInput<MouseButton>>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    let mut changed = false;

    if mouse_button.pressed(MouseButton::Left) {
        for event in motion_events.read() {
            camera_state.yaw -= event.delta.x * ROTATE_SENSITIVITY;
            camera_state.pitch = (camera_state.pitch - event.delta.y * ROTATE_SENSITIVITY).clamp(
                -std::f32::consts::FRAC_PI_2 + 0.01,
                std::f32::consts::FRAC_PI_2 - 0.01,
            );
            changed = true;
        }
    } else {
        motion_events.clear();
    }

    for event in wheel_events.read() {
        camera_state.zoom(event.y);
        changed = true;
    }

    if changed {
        for mut transform in &mut query {
            *transform = camera_state.transform();
        }
    }
}
