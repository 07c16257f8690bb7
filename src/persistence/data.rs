use serde::{Deserialize, Serialize};

/// Player stats read as initial tunables by the controller.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerData {
    pub health: i32,
    pub speed: f32,
    pub jump_force: f32,
}

impl Default for PlayerData {
    fn default() -> Self {
        Self {
            health: 100,
            speed: 7.0,
            jump_force: 5.0,
        }
    }
}

/// User-facing settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct SettingsData {
    pub brightness: i32,
    pub master_volume: i32,
    pub sfx_volume: i32,
    pub bgm_volume: i32,
    pub sensitivity: i32,
}

/// The whole save file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct GameData {
    pub player_data: PlayerData,
    pub settings_data: SettingsData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let data = GameData::default();
        assert_eq!(data.player_data.health, 100);
        assert_eq!(data.player_data.speed, 7.0);
        assert_eq!(data.player_data.jump_force, 5.0);
        assert_eq!(data.settings_data, SettingsData::default());
    }

    #[test]
    fn test_json_uses_camel_case_keys() {
        let json = serde_json::to_string(&GameData::default()).unwrap();
        assert!(json.contains("\"playerData\""));
        assert!(json.contains("\"jumpForce\""));
        assert!(json.contains("\"masterVolume\""));
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let data: GameData = serde_json::from_str(r#"{"playerData":{"speed":9.0}}"#).unwrap();
        assert_eq!(data.player_data.speed, 9.0);
        assert_eq!(data.player_data.health, 100);
        assert_eq!(data.settings_data.sensitivity, 0);
    }
}
