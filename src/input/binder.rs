use bevy::prelude::*;
use thiserror::Error;

use super::actions::{
    ActionEvent, ActionId, ActionPhase, ActionSource, CROUCH, JUMP, MOVEMENT, ROTATION,
};
use super::snapshot::InputSnapshot;

/// Startup failure: the controller cannot run without its bindings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    #[error("action map `{0}` not found")]
    MissingActionMap(String),
    #[error("action `{action}` not found in map `{map}`")]
    MissingAction { map: String, action: String },
}

/// Resolved handles for the four first-person actions.
#[derive(Debug, Clone)]
pub struct ActionBinder {
    map: String,
    movement: ActionId,
    rotation: ActionId,
    jump: ActionId,
    crouch: ActionId,
}

impl ActionBinder {
    /// Looks up every action once. Any missing name is fatal.
    pub fn resolve(source: &dyn ActionSource, map: &str) -> Result<Self, BindingError> {
        if !source.has_map(map) {
            return Err(BindingError::MissingActionMap(map.to_string()));
        }

        let find = |action: &str| {
            source
                .find_action(map, action)
                .ok_or_else(|| BindingError::MissingAction {
                    map: map.to_string(),
                    action: action.to_string(),
                })
        };

        Ok(Self {
            map: map.to_string(),
            movement: find(MOVEMENT)?,
            rotation: find(ROTATION)?,
            jump: find(JUMP)?,
            crouch: find(CROUCH)?,
        })
    }

    pub fn map(&self) -> &str {
        &self.map
    }

    pub fn enable(&self, source: &mut dyn ActionSource) {
        source.enable_map(&self.map);
    }

    pub fn disable(&self, source: &mut dyn ActionSource) {
        source.disable_map(&self.map);
    }

    /// Writes one event into the snapshot. Cancel always resets the field
    /// to neutral, even if nothing was performed before.
    pub fn apply(&self, event: ActionEvent, snapshot: &mut InputSnapshot) {
        let performed = match event.phase {
            ActionPhase::Performed(value) => Some(value),
            ActionPhase::Canceled => None,
        };

        if event.action == self.movement {
            snapshot.movement = performed.unwrap_or(Vec2::ZERO);
        } else if event.action == self.rotation {
            snapshot.rotation = performed.unwrap_or(Vec2::ZERO);
        } else if event.action == self.jump {
            snapshot.jump_held = performed.is_some();
        } else if event.action == self.crouch {
            snapshot.crouch_held = performed.is_some();
        }
    }
}
