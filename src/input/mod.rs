pub mod actions;
pub mod binder;
pub mod snapshot;
pub mod systems;

use bevy::prelude::*;

pub use actions::{
    ActionAsset, ActionEvent, ActionId, ActionKind, ActionPhase, ActionSource, CROUCH, JUMP,
    MOVEMENT, PLAYER_MAP, ROTATION,
};
pub use binder::{ActionBinder, BindingError};
pub use snapshot::InputSnapshot;
pub use systems::KeyBindings;

use crate::game_state::AppState;
use systems::feed_player_actions;

/// Device polling; everything reading input runs after this.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputSet;

pub struct PlayerInputPlugin;

impl Plugin for PlayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<KeyBindings>().add_systems(
            Update,
            feed_player_actions
                .in_set(InputSet)
                .run_if(in_state(AppState::InGame)),
        );
    }
}
