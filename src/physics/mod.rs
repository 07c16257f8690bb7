//! Ground-movement primitive.
//!
//! The locomotion code only hands over a displacement and asks whether the
//! body is standing on something. Collision resolution lives here.

use bevy::prelude::*;

/// Height of the body's center above its feet.
pub const BODY_HALF_HEIGHT: f32 = 1.0;

// Small tolerance so a body resting exactly on the floor counts as grounded.
const GROUND_EPSILON: f32 = 0.001;

pub trait GroundMover {
    /// Moves the body by `displacement`, resolving collisions.
    fn move_by(&mut self, displacement: Vec3);

    /// Whether the last move left the body resting on a walkable surface.
    fn is_grounded(&self) -> bool;
}

/// Kinematic body confined to a flat, walled room.
#[derive(Debug, Clone)]
pub struct KinematicBody {
    position: Vec3,
    floor_height: f32,
    half_extents: Vec2,
    grounded: bool,
}

impl KinematicBody {
    /// Creates a body at `position` inside a room whose floor sits at
    /// `floor_height` and whose walls are `half_extents` (x, z) from the
    /// origin.
    pub fn new(position: Vec3, floor_height: f32, half_extents: Vec2) -> Self {
        let mut body = Self {
            position,
            floor_height,
            half_extents,
            grounded: false,
        };
        body.resolve();
        body
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    fn resting_height(&self) -> f32 {
        self.floor_height + BODY_HALF_HEIGHT
    }

    fn resolve(&mut self) {
        let rest = self.resting_height();
        if self.position.y <= rest + GROUND_EPSILON {
            self.position.y = rest;
            self.grounded = true;
        } else {
            self.grounded = false;
        }

        // Keep inside the room
        self.position.x = self
            .position
            .x
            .clamp(-self.half_extents.x, self.half_extents.x);
        self.position.z = self
            .position
            .z
            .clamp(-self.half_extents.y, self.half_extents.y);
    }
}

impl GroundMover for KinematicBody {
    fn move_by(&mut self, displacement: Vec3) {
        self.position += displacement;
        self.resolve();
    }

    fn is_grounded(&self) -> bool {
        self.grounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn room_body(position: Vec3) -> KinematicBody {
        KinematicBody::new(position, 0.0, Vec2::new(4.8, 4.8))
    }

    #[test]
    fn test_spawned_on_floor_is_grounded() {
        let body = room_body(Vec3::new(0.0, BODY_HALF_HEIGHT, 0.0));
        assert!(body.is_grounded());
    }

    #[test]
    fn test_airborne_after_upward_move() {
        let mut body = room_body(Vec3::new(0.0, BODY_HALF_HEIGHT, 0.0));
        body.move_by(Vec3::new(0.0, 0.5, 0.0));
        assert!(!body.is_grounded());
        assert_eq!(body.position().y, BODY_HALF_HEIGHT + 0.5);
    }

    #[test]
    fn test_floor_stops_downward_move() {
        let mut body = room_body(Vec3::new(0.0, 3.0, 0.0));
        body.move_by(Vec3::new(0.0, -10.0, 0.0));
        assert!(body.is_grounded());
        assert_eq!(body.position().y, BODY_HALF_HEIGHT);
    }

    #[test]
    fn test_walls_clamp_horizontal_move() {
        let mut body = room_body(Vec3::new(0.0, BODY_HALF_HEIGHT, 0.0));
        body.move_by(Vec3::new(20.0, 0.0, -20.0));
        assert_eq!(body.position().x, 4.8);
        assert_eq!(body.position().z, -4.8);
    }
}
