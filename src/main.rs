use bevy::{
    diagnostic::{FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin},
    prelude::*,
    window::PresentMode,
};

use stride::persistence::PersistencePlugin;
use stride::StridePlugin;

const SAVE_PATH_ENV: &str = "STRIDE_SAVE_PATH";

fn main() {
    let save_path = std::env::var(SAVE_PATH_ENV).unwrap_or_else(|_| "save.json".to_string());

    App::new()
        .add_plugins(
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Stride".to_string(),
                    present_mode: PresentMode::AutoNoVsync,
                    ..default()
                }),
                ..default()
            }),
        )
        .add_plugins((
            FrameTimeDiagnosticsPlugin::default(),
            LogDiagnosticsPlugin::default(),
        ))
        .add_plugins((
            StridePlugin,
            PersistencePlugin {
                path: save_path.into(),
            },
        ))
        .run();
}
