//! First-person controller: input in, locomotion and view rig out.
//!
//! Collaborators are handed in at construction. The controller only acts
//! between `start` and `stop`; each `tick` is one frame:
//!
//! 1. drain pending action events into the input snapshot
//! 2. step height animations
//! 3. sprint gesture, horizontal velocity, jump and gravity, then one move
//! 4. yaw
//! 5. crouch

use bevy::prelude::*;

use super::components::PlayerTuning;
use super::crouch::{CrouchController, CrouchTransition};
use super::locomotion::{horizontal_velocity, select_speed, MotionState};
use super::sprint::SprintDetector;
use super::view::{accumulate_yaw, facing};
use crate::input::{ActionBinder, ActionSource, BindingError, InputSnapshot, PLAYER_MAP};
use crate::physics::GroundMover;
use crate::tween::Tweener;

/// What happened during one tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickReport {
    pub displacement: Vec3,
    pub jumped: bool,
    pub crouch: Option<CrouchTransition>,
}

pub struct FirstPersonController<S, G, T> {
    source: S,
    body: G,
    tweens: T,
    binder: ActionBinder,
    tuning: PlayerTuning,
    input: InputSnapshot,
    sprint: SprintDetector,
    motion: MotionState,
    crouch: CrouchController,
    running: bool,
}

impl<S, G, T> FirstPersonController<S, G, T>
where
    S: ActionSource,
    G: GroundMover,
    T: Tweener,
{
    /// Binds to the `Player` action map of `source`.
    pub fn new(source: S, body: G, tweens: T, tuning: PlayerTuning) -> Result<Self, BindingError> {
        Self::with_action_map(source, body, tweens, tuning, PLAYER_MAP)
    }

    pub fn with_action_map(
        source: S,
        body: G,
        tweens: T,
        tuning: PlayerTuning,
        map: &str,
    ) -> Result<Self, BindingError> {
        let binder = ActionBinder::resolve(&source, map)?;

        Ok(Self {
            source,
            body,
            tweens,
            binder,
            tuning,
            input: InputSnapshot::default(),
            sprint: SprintDetector::new(tuning.double_tap_window),
            motion: MotionState::default(),
            crouch: CrouchController::new(&tuning),
            running: false,
        })
    }

    /// Begins receiving input.
    pub fn start(&mut self) {
        if self.running {
            return;
        }
        self.binder.enable(&mut self.source);
        self.running = true;
        info!("Controller started on action map `{}`", self.binder.map());
    }

    /// Stops receiving input. Anything held is treated as released since
    /// no cancel will arrive for it.
    pub fn stop(&mut self) {
        if !self.running {
            return;
        }
        self.binder.disable(&mut self.source);
        self.input.release_all();
        self.running = false;
        info!("Controller stopped");
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Runs one frame at time `now` with frame duration `dt`, both in
    /// seconds. Does nothing while stopped.
    pub fn tick(&mut self, now: f32, dt: f32) -> TickReport {
        if !self.running {
            return TickReport::default();
        }

        let binder = &self.binder;
        let input = &mut self.input;
        self.source.drain(&mut |event| binder.apply(event, input));

        let crouch = &mut self.crouch;
        self.tweens
            .advance(dt, &mut |id, value| crouch.on_height_update(id, value));

        // Movement, using last tick's facing and stance
        self.sprint.update(self.input.movement.y, now);
        let speed = select_speed(
            &self.tuning,
            self.crouch.is_crouching(),
            self.sprint.is_sprinting(),
        );
        self.motion.horizontal =
            horizontal_velocity(self.input.movement, facing(self.motion.yaw), speed);

        let jumped = self.motion.integrate_vertical(
            self.input.jump_held,
            self.body.is_grounded(),
            &self.tuning,
            dt,
        );
        if jumped {
            debug!("Jump");
        }

        let displacement = self.motion.displacement(dt);
        self.body.move_by(displacement);

        // Look
        self.motion.yaw = accumulate_yaw(
            self.motion.yaw,
            self.input.rotation,
            self.tuning.mouse_sensitivity,
        );

        let crouch = self
            .crouch
            .update(self.input.crouch_held, &mut self.tweens, &mut self.sprint);

        TickReport {
            displacement,
            jumped,
            crouch,
        }
    }

    pub fn facing(&self) -> Quat {
        facing(self.motion.yaw)
    }

    pub fn view_height(&self) -> f32 {
        self.crouch.view_height()
    }

    pub fn input(&self) -> &InputSnapshot {
        &self.input
    }

    pub fn sprint(&self) -> &SprintDetector {
        &self.sprint
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn crouch(&self) -> &CrouchController {
        &self.crouch
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Devices raise events through this.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn body(&self) -> &G {
        &self.body
    }

    pub fn body_mut(&mut self) -> &mut G {
        &mut self.body
    }

    pub fn tweens(&self) -> &T {
        &self.tweens
    }
}
