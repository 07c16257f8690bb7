use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use thiserror::Error;

use super::data::GameData;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("save file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("save file {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// JSON file holding the single `GameData` record.
#[derive(Resource, Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the record, creating and persisting defaults when the file
    /// does not exist yet.
    pub fn load(&self) -> Result<GameData, StoreError> {
        if !self.path.exists() {
            info!("No save at {}, writing defaults", self.path.display());
            self.save(&GameData::default())?;
        }

        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })?;
        let data = serde_json::from_str(&json).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        debug!("Loaded save from {}", self.path.display());
        Ok(data)
    }

    /// Overwrites the whole file with `data`.
    pub fn save(&self, data: &GameData) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(data).map_err(|source| StoreError::Json {
            path: self.path.clone(),
            source,
        })?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: self.path.clone(),
                source,
            })?;
        }

        fs::write(&self.path, json).map_err(|source| StoreError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store(name: &str) -> RecordStore {
        let path = std::env::temp_dir()
            .join(format!("stride-store-{}-{}", std::process::id(), name))
            .join("save.json");
        let _ = fs::remove_file(&path);
        RecordStore::new(path)
    }

    #[test]
    fn test_load_creates_default_record() {
        let store = temp_store("create");
        assert!(!store.path().exists());

        let data = store.load().unwrap();
        assert_eq!(data, GameData::default());
        assert!(store.path().exists());
    }

    #[test]
    fn test_save_overwrites_whole_record() {
        let store = temp_store("overwrite");
        let mut data = store.load().unwrap();
        data.player_data.speed = 11.0;
        data.settings_data.sensitivity = 4;

        store.save(&data).unwrap();
        store.save(&data).unwrap();

        assert_eq!(store.load().unwrap(), data);
    }

    #[test]
    fn test_corrupt_file_is_json_error() {
        let store = temp_store("corrupt");
        store.load().unwrap();
        fs::write(store.path(), "{ not json").unwrap();

        assert!(matches!(store.load(), Err(StoreError::Json { .. })));
    }
}
