use bevy::prelude::*;

/// Latest input values, written by action events and read once per tick.
///
/// Last write wins: a value replaced twice between reads is only seen once.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputSnapshot {
    /// x: strafe right, y: forward.
    pub movement: Vec2,
    /// x: yaw delta, y: pitch delta.
    pub rotation: Vec2,
    pub jump_held: bool,
    pub crouch_held: bool,
}

impl InputSnapshot {
    /// Returns every field to its neutral value.
    ///
    /// Used when delivery stops: no cancel will arrive for anything that
    /// was held at that moment.
    pub fn release_all(&mut self) {
        *self = Self::default();
    }
}
