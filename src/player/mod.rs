pub mod components;
pub mod controller;
pub mod crouch;
pub mod locomotion;
pub mod sprint;
pub mod systems;
pub mod view;

use bevy::prelude::*;

pub use components::{
    Head, Player, PlayerRig, PlayerTuning, BASE_SPEED, CROUCHING_DURATION, CROUCHING_VIEW_HEIGHT,
    DOUBLE_TAP_WINDOW, GRAVITY, JUMP_FORCE, MOUSE_SENSITIVITY, STANDING_VIEW_HEIGHT,
};
pub use controller::{FirstPersonController, TickReport};
pub use crouch::{CrouchController, CrouchTransition};
pub use locomotion::MotionState;
pub use sprint::SprintDetector;

use crate::game_state::AppState;
use crate::input::InputSet;
use systems::{despawn_player, spawn_player, stop_player, tick_player};

/// Runs after input has been fed for the frame.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerSet;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(AppState::InGame), spawn_player)
            .add_systems(OnExit(AppState::InGame), (stop_player, despawn_player).chain())
            .add_systems(
                Update,
                tick_player
                    .in_set(PlayerSet)
                    .after(InputSet)
                    .run_if(in_state(AppState::InGame)),
            );
    }
}
