//! First-person avatar controller.
//!
//! The controller core (`player`, `input`, `physics`, `tween`) is plain
//! Rust driven by explicit ticks, so it runs the same inside the Bevy app
//! and in tests. The plugins wire it to devices, the camera and the scene.

pub mod camera;
pub mod game_state;
pub mod input;
pub mod persistence;
pub mod physics;
pub mod player;
pub mod tween;
pub mod world;

use bevy::prelude::*;

use camera::CameraPlugin;
use game_state::AppState;
use input::PlayerInputPlugin;
use player::PlayerPlugin;
use world::WorldPlugin;

/// Game plugins, minus persistence which needs a save location.
///
/// Add a `persistence::PersistencePlugin` alongside; it moves the game to
/// `AppState::InGame` once the save record is loaded.
pub struct StridePlugin;

impl Plugin for StridePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<AppState>()
            .add_plugins((PlayerInputPlugin, PlayerPlugin, CameraPlugin, WorldPlugin));
    }
}
