use bevy::{input::mouse::MouseMotion, prelude::*, window::{CursorGrabMode, PrimaryWindow}};

use super::actions::{ActionAsset, ActionPhase, CROUCH, JUMP, MOVEMENT, PLAYER_MAP, ROTATION};
use crate::player::PlayerRig;

/// Physical keys for the first-person actions.
#[derive(Resource, Debug, Clone)]
pub struct KeyBindings {
    pub forward: KeyCode,
    pub backward: KeyCode,
    pub left: KeyCode,
    pub right: KeyCode,
    pub jump: KeyCode,
    pub crouch: KeyCode,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            forward: KeyCode::KeyW,
            backward: KeyCode::KeyS,
            left: KeyCode::KeyA,
            right: KeyCode::KeyD,
            jump: KeyCode::Space,
            crouch: KeyCode::ControlLeft,
        }
    }
}

/// What the devices last reported, so value actions only fire on change.
#[derive(Default)]
pub struct DeviceState {
    movement: Vec2,
    rotating: bool,
}

/// Composite of the four movement keys, normalized. x: right, y: forward.
pub fn movement_composite(keyboard: &ButtonInput<KeyCode>, bindings: &KeyBindings) -> Vec2 {
    let mut direction = Vec2::ZERO;

    if keyboard.pressed(bindings.forward) {
        direction.y += 1.0;
    }
    if keyboard.pressed(bindings.backward) {
        direction.y -= 1.0;
    }
    if keyboard.pressed(bindings.left) {
        direction.x -= 1.0;
    }
    if keyboard.pressed(bindings.right) {
        direction.x += 1.0;
    }

    direction.normalize_or_zero()
}

/// Raises action events on every player's action asset from keyboard and
/// mouse state.
pub fn feed_player_actions(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut mouse_motion: EventReader<MouseMotion>,
    windows: Query<&Window, With<PrimaryWindow>>,
    bindings: Res<KeyBindings>,
    mut device: Local<DeviceState>,
    mut rigs: Query<&mut PlayerRig>,
) {
    let grabbed = windows
        .get_single()
        .map(|w| w.cursor_options.grab_mode != CursorGrabMode::None)
        .unwrap_or(false);

    // Mouse y grows downward; actions use y up
    let mut look = Vec2::ZERO;
    for event in mouse_motion.read() {
        look += Vec2::new(event.delta.x, -event.delta.y);
    }
    if !grabbed {
        look = Vec2::ZERO;
    }

    let movement = movement_composite(&keyboard, &bindings);

    let mut phases: Vec<(&str, ActionPhase)> = Vec::new();

    if movement != device.movement {
        device.movement = movement;
        phases.push((MOVEMENT, value_phase(movement)));
    }

    if look != Vec2::ZERO {
        device.rotating = true;
        phases.push((ROTATION, ActionPhase::Performed(look)));
    } else if device.rotating {
        device.rotating = false;
        phases.push((ROTATION, ActionPhase::Canceled));
    }

    for (key, action) in [(bindings.jump, JUMP), (bindings.crouch, CROUCH)] {
        if keyboard.just_pressed(key) {
            phases.push((action, ActionPhase::Performed(Vec2::ZERO)));
        }
        if keyboard.just_released(key) {
            phases.push((action, ActionPhase::Canceled));
        }
    }

    for mut rig in rigs.iter_mut() {
        let asset: &mut ActionAsset = rig.0.source_mut();
        for (action, phase) in &phases {
            asset.trigger_named(PLAYER_MAP, action, *phase);
        }
    }
}

fn value_phase(value: Vec2) -> ActionPhase {
    if value == Vec2::ZERO {
        ActionPhase::Canceled
    } else {
        ActionPhase::Performed(value)
    }
}
