use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

use crate::engine::camera::viewport_camera::{ViewportCamera, camera_controller};
use crate::engine::core::window_config::create_window_config;
use crate::engine::point_cloud::{RenderState, spawn_point_cloud, upload_point_cloud};
use crate::engine::systems::hud::{HudText, hud_text_update_system};
use crate::stream::{StreamPlugin, ingest_latest_frame};

pub fn create_app() -> App {
    let mut app = App::new();

    app.add_plugins(create_default_plugins())
        .add_plugins(FrameTimeDiagnosticsPlugin::default())
        .add_plugins(StreamPlugin)
        .init_resource::<RenderState>()
        .init_resource::<ViewportCamera>()
        .add_systems(Startup, setup)
        .add_systems(
            Update,
            (
                // Decode before upload so a frame arriving this tick is
                // visible this tick.
                (ingest_latest_frame, upload_point_cloud).chain(),
                camera_controller,
                hud_text_update_system,
            ),
        );

    app
}

fn create_default_plugins() -> impl PluginGroup {
    let window_config = WindowPlugin {
        primary_window: Some(create_window_config()),
        ..default()
    };

    DefaultPlugins.set(window_config)
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    camera_state: Res<ViewportCamera>,
) {
    commands.spawn((Camera3d::default(), camera_state.transform()));
    spawn_point_cloud(&mut commands, &mut meshes, &mut materials);
    spawn_hud(&mut commands);
}

fn spawn_hud(commands: &mut Commands) {
    commands
        .spawn(Node {
            width: Val::Percent(100.0),
            height: Val::Percent(100.0),
            ..default()
        })
        .with_children(|parent| {
            parent.spawn((
                Text::new("FPS: "),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(Color::srgb(1., 0., 0.)),
                Node {
                    position_type: PositionType::Absolute,
                    bottom: Val::Px(12.0),
                    right: Val::Px(12.0),
                    ..default()
                },
                HudText,
            ));
        });
}
