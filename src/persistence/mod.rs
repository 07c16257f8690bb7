pub mod data;
pub mod store;

use std::path::PathBuf;

use bevy::prelude::*;

pub use data::{GameData, PlayerData, SettingsData};
pub use store::{RecordStore, StoreError};

use crate::game_state::AppState;

/// Loaded save record.
///
/// Inserted during `Startup`; the game moves to `AppState::InGame` only
/// once it exists, so everything spawned on entering the game can read it.
#[derive(Resource, Debug, Clone, Default)]
pub struct GameRecord(pub GameData);

pub struct PersistencePlugin {
    pub path: PathBuf,
}

impl Default for PersistencePlugin {
    fn default() -> Self {
        Self {
            path: PathBuf::from("save.json"),
        }
    }
}

impl Plugin for PersistencePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(RecordStore::new(self.path.clone()))
            .add_systems(Startup, load_game_record)
            .add_systems(Last, save_on_exit);
    }
}

fn load_game_record(
    store: Res<RecordStore>,
    mut commands: Commands,
    mut next: ResMut<NextState<AppState>>,
) {
    let data = match store.load() {
        Ok(data) => data,
        Err(e) => {
            error!("Failed to load save, using defaults: {}", e);
            GameData::default()
        }
    };

    info!("Save record ready ({})", store.path().display());
    commands.insert_resource(GameRecord(data));
    next.set(AppState::InGame);
}

fn save_on_exit(
    mut exits: EventReader<AppExit>,
    store: Res<RecordStore>,
    record: Option<Res<GameRecord>>,
) {
    if exits.read().next().is_none() {
        return;
    }
    let Some(record) = record else {
        return;
    };

    match store.save(&record.0) {
        Ok(()) => info!("Saved game to {}", store.path().display()),
        Err(e) => error!("Failed to save game: {}", e),
    }
}
