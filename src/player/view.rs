use bevy::prelude::*;

/// Adds this tick's horizontal rotation input to the yaw, in degrees.
///
/// Unbounded: only the derived rotation is ever used.
pub fn accumulate_yaw(yaw: f32, rotation_input: Vec2, sensitivity: f32) -> f32 {
    yaw + rotation_input.x * sensitivity
}

/// Facing rotation for a yaw in degrees. Positive yaw turns right.
pub fn facing(yaw: f32) -> Quat {
    Quat::from_rotation_y(-yaw.to_radians())
}
