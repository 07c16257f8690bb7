//! Named input actions grouped into action maps.
//!
//! Devices raise events against an action; consumers drain them once per
//! tick. A map only delivers while enabled.

use bevy::prelude::*;

/// Name of the map holding first-person controls.
pub const PLAYER_MAP: &str = "Player";

pub const MOVEMENT: &str = "Movement";
pub const ROTATION: &str = "Rotation";
pub const JUMP: &str = "Jump";
pub const CROUCH: &str = "Crouch";

/// Stable reference to one action inside an asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId {
    map: usize,
    action: usize,
}

/// Whether an action carries a continuous value or is a plain button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Value,
    Button,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionPhase {
    /// Button pressed, or an axis reported a new value.
    Performed(Vec2),
    /// Button released, or an axis returned to rest.
    Canceled,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActionEvent {
    pub action: ActionId,
    pub phase: ActionPhase,
}

/// Where a controller gets its input from.
pub trait ActionSource {
    fn find_action(&self, map: &str, action: &str) -> Option<ActionId>;

    fn has_map(&self, map: &str) -> bool;

    /// Starts delivering events for `map`.
    fn enable_map(&mut self, map: &str);

    /// Stops delivering events for `map` and drops anything pending.
    fn disable_map(&mut self, map: &str);

    /// Hands every pending event to `sink`, oldest first.
    fn drain(&mut self, sink: &mut dyn FnMut(ActionEvent));
}

#[derive(Debug, Clone)]
struct InputAction {
    name: String,
    kind: ActionKind,
}

#[derive(Debug, Clone)]
struct ActionMap {
    name: String,
    actions: Vec<InputAction>,
    enabled: bool,
}

/// In-memory action source.
#[derive(Debug, Clone, Default)]
pub struct ActionAsset {
    maps: Vec<ActionMap>,
    pending: Vec<ActionEvent>,
}

impl ActionAsset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Asset with the `Player` map used by the first-person controller.
    pub fn first_person() -> Self {
        let mut asset = Self::new();
        asset
            .add_map(PLAYER_MAP)
            .add_action(PLAYER_MAP, MOVEMENT, ActionKind::Value)
            .add_action(PLAYER_MAP, ROTATION, ActionKind::Value)
            .add_action(PLAYER_MAP, JUMP, ActionKind::Button)
            .add_action(PLAYER_MAP, CROUCH, ActionKind::Button);
        asset
    }

    pub fn add_map(&mut self, name: &str) -> &mut Self {
        if self.map_index(name).is_none() {
            self.maps.push(ActionMap {
                name: name.to_string(),
                actions: Vec::new(),
                enabled: false,
            });
        }
        self
    }

    /// Adds an action to an existing map. Unknown maps are created.
    pub fn add_action(&mut self, map: &str, action: &str, kind: ActionKind) -> &mut Self {
        self.add_map(map);
        if let Some(index) = self.map_index(map) {
            let actions = &mut self.maps[index].actions;
            if !actions.iter().any(|a| a.name == action) {
                actions.push(InputAction {
                    name: action.to_string(),
                    kind,
                });
            }
        }
        self
    }

    pub fn kind(&self, id: ActionId) -> Option<ActionKind> {
        self.maps
            .get(id.map)
            .and_then(|m| m.actions.get(id.action))
            .map(|a| a.kind)
    }

    pub fn is_enabled(&self, map: &str) -> bool {
        self.map_index(map)
            .map(|index| self.maps[index].enabled)
            .unwrap_or(false)
    }

    /// Queues an event. Dropped while the action's map is disabled, and
    /// when a button is performed with a value attached.
    pub fn trigger(&mut self, action: ActionId, phase: ActionPhase) {
        let Some(map) = self.maps.get(action.map) else {
            return;
        };
        if !map.enabled {
            return;
        }
        let Some(kind) = map.actions.get(action.action).map(|a| a.kind) else {
            return;
        };
        let carries_value = matches!(phase, ActionPhase::Performed(v) if v != Vec2::ZERO);
        if kind == ActionKind::Button && carries_value {
            return;
        }
        self.pending.push(ActionEvent { action, phase });
    }

    /// Convenience for devices: looks the action up by name and queues.
    pub fn trigger_named(&mut self, map: &str, action: &str, phase: ActionPhase) {
        if let Some(id) = self.find_action(map, action) {
            self.trigger(id, phase);
        }
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    fn map_index(&self, name: &str) -> Option<usize> {
        self.maps.iter().position(|m| m.name == name)
    }
}

impl ActionSource for ActionAsset {
    fn find_action(&self, map: &str, action: &str) -> Option<ActionId> {
        let map_index = self.map_index(map)?;
        let action_index = self.maps[map_index]
            .actions
            .iter()
            .position(|a| a.name == action)?;
        Some(ActionId {
            map: map_index,
            action: action_index,
        })
    }

    fn has_map(&self, map: &str) -> bool {
        self.map_index(map).is_some()
    }

    fn enable_map(&mut self, map: &str) {
        if let Some(index) = self.map_index(map) {
            self.maps[index].enabled = true;
        }
    }

    fn disable_map(&mut self, map: &str) {
        let Some(index) = self.map_index(map) else {
            return;
        };
        self.maps[index].enabled = false;
        self.pending.retain(|e| e.action.map != index);
    }

    fn drain(&mut self, sink: &mut dyn FnMut(ActionEvent)) {
        for event in self.pending.drain(..) {
            sink(event);
        }
    }
}
