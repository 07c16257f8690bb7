pub mod systems;

use bevy::prelude::*;

use crate::game_state::AppState;
use crate::player::PlayerSet;
use systems::{center_cursor, grab_cursor, release_cursor, sync_head_height, toggle_cursor_grab};

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), grab_cursor)
            .add_systems(OnExit(AppState::InGame), release_cursor)
            .add_systems(
                Update,
                (
                    sync_head_height.after(PlayerSet),
                    center_cursor,
                    toggle_cursor_grab,
                )
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
