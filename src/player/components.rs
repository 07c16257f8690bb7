use bevy::prelude::*;

use super::controller::FirstPersonController;
use crate::input::ActionAsset;
use crate::persistence::PlayerData;
use crate::physics::KinematicBody;
use crate::tween::TweenEngine;

/// Marker component for the player entity.
#[derive(Component)]
pub struct Player;

/// Marker for the head entity carrying the camera.
#[derive(Component)]
pub struct Head;

/// Controller driving the player, wired to the in-game collaborators.
#[derive(Component)]
pub struct PlayerRig(pub FirstPersonController<ActionAsset, KinematicBody, TweenEngine>);

// Locomotion
pub const BASE_SPEED: f32 = 7.0;
pub const CROUCHING_SPEED_MULTIPLIER: f32 = 1.0 / 3.0;
pub const SPRINTING_SPEED_MULTIPLIER: f32 = 2.0;
pub const JUMP_FORCE: f32 = 5.0;
pub const GRAVITY: f32 = -9.81;
pub const GRAVITY_MULTIPLIER: f32 = 1.0;

// Look, in degrees per unit of rotation input
pub const MOUSE_SENSITIVITY: f32 = 0.1;

// Sprint gesture
pub const DOUBLE_TAP_WINDOW: f32 = 0.25;

// Crouch, heights are the head's offset above the body center
pub const CROUCHING_DURATION: f32 = 0.1;
pub const STANDING_VIEW_HEIGHT: f32 = 0.8;
pub const CROUCHING_VIEW_HEIGHT: f32 = 0.0;

/// Physical parameters of one controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlayerTuning {
    pub base_speed: f32,
    pub crouching_speed_multiplier: f32,
    pub sprinting_speed_multiplier: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub gravity_multiplier: f32,
    pub mouse_sensitivity: f32,
    pub double_tap_window: f32,
    pub crouching_duration: f32,
    pub standing_view_height: f32,
    pub crouching_view_height: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            base_speed: BASE_SPEED,
            crouching_speed_multiplier: CROUCHING_SPEED_MULTIPLIER,
            sprinting_speed_multiplier: SPRINTING_SPEED_MULTIPLIER,
            jump_force: JUMP_FORCE,
            gravity: GRAVITY,
            gravity_multiplier: GRAVITY_MULTIPLIER,
            mouse_sensitivity: MOUSE_SENSITIVITY,
            double_tap_window: DOUBLE_TAP_WINDOW,
            crouching_duration: CROUCHING_DURATION,
            standing_view_height: STANDING_VIEW_HEIGHT,
            crouching_view_height: CROUCHING_VIEW_HEIGHT,
        }
    }
}

impl PlayerTuning {
    /// Defaults with speed and jump force taken from the save record.
    pub fn from_player_data(data: &PlayerData) -> Self {
        Self {
            base_speed: data.speed,
            jump_force: data.jump_force,
            ..default()
        }
    }
}
