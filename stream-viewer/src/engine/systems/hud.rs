use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::point_cloud::RenderState;

#[derive(Component)]
pub struct HudText;

/// Overlay with render rate and stream counters.
pub fn hud_text_update_system(
    diagnostics: Res<DiagnosticsStore>,
    state: Res<RenderState>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    for mut text in &mut query {
        let fps = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
            .unwrap_or(0.0);

        text.0 = format!(
            "FPS: {fps:.1}\npoints: {}\nframes: {}",
            state.point_count, state.frames_received
        );
    }
}
