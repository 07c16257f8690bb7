use bevy::prelude::*;

use super::components::PlayerTuning;

/// Velocity and facing owned by the controller.
///
/// Vertical velocity carries over between ticks so gravity accumulates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MotionState {
    /// World-space x/z velocity.
    pub horizontal: Vec2,
    pub vertical: f32,
    /// Degrees, see `view::facing`.
    pub yaw: f32,
}

/// Speed for the current stance. Crouching wins over sprinting.
pub fn select_speed(tuning: &PlayerTuning, crouching: bool, sprinting: bool) -> f32 {
    if crouching {
        tuning.base_speed * tuning.crouching_speed_multiplier
    } else if sprinting {
        tuning.base_speed * tuning.sprinting_speed_multiplier
    } else {
        tuning.base_speed
    }
}

/// Rotates the movement input into the facing and scales it to `speed`.
///
/// Input x strafes right, y moves forward. The result is the x/z velocity.
pub fn horizontal_velocity(input: Vec2, facing: Quat, speed: f32) -> Vec2 {
    let local = Vec3::new(input.x, 0.0, -input.y);
    let world = facing * local;
    Vec2::new(world.x, world.z).normalize_or_zero() * speed
}

impl MotionState {
    /// Applies a grounded jump and one tick of gravity.
    ///
    /// The jump overwrites the vertical velocity rather than adding to it.
    /// Nothing here zeroes the velocity on landing. Returns whether a jump
    /// happened.
    pub fn integrate_vertical(
        &mut self,
        jump_held: bool,
        grounded: bool,
        tuning: &PlayerTuning,
        dt: f32,
    ) -> bool {
        let jumped = jump_held && grounded;
        if jumped {
            self.vertical = tuning.jump_force;
        }
        self.vertical += tuning.gravity * tuning.gravity_multiplier * dt;
        jumped
    }

    /// World displacement for one tick.
    pub fn displacement(&self, dt: f32) -> Vec3 {
        Vec3::new(self.horizontal.x, self.vertical, self.horizontal.y) * dt
    }
}
