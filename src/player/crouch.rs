//! Standing/crouching state with an animated view height.
//!
//! The logical stance flips on the button edge. The height animation only
//! follows it, always at the same speed: a transition that starts partway
//! through the previous one takes proportionally less time.

use bevy::prelude::*;

use super::components::PlayerTuning;
use super::sprint::SprintDetector;
use crate::tween::{TweenId, Tweener};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrouchTransition {
    Crouched,
    Stood,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CrouchController {
    is_crouching: bool,
    active_animation: Option<TweenId>,
    view_height: f32,
    standing_height: f32,
    crouching_height: f32,
    speed: f32,
}

impl CrouchController {
    pub fn new(tuning: &PlayerTuning) -> Self {
        let distance = (tuning.standing_view_height - tuning.crouching_view_height).abs();
        Self {
            is_crouching: false,
            active_animation: None,
            view_height: tuning.standing_view_height,
            standing_height: tuning.standing_view_height,
            crouching_height: tuning.crouching_view_height,
            speed: distance / tuning.crouching_duration,
        }
    }

    pub fn is_crouching(&self) -> bool {
        self.is_crouching
    }

    /// Current (possibly mid-animation) view height.
    pub fn view_height(&self) -> f32 {
        self.view_height
    }

    pub fn active_animation(&self) -> Option<TweenId> {
        self.active_animation
    }

    /// Animation update callback: tracks the height of our own animation.
    pub fn on_height_update(&mut self, id: TweenId, value: f32) {
        if self.active_animation == Some(id) {
            self.view_height = value;
        }
    }

    /// Reacts to the crouch button. Entering a crouch ends any sprint.
    pub fn update(
        &mut self,
        crouch_held: bool,
        tweens: &mut dyn Tweener,
        sprint: &mut SprintDetector,
    ) -> Option<CrouchTransition> {
        if crouch_held && !self.is_crouching {
            self.is_crouching = true;
            sprint.cancel();
            self.retarget(self.crouching_height, tweens);
            debug!("Crouched, view height {:.3}", self.view_height);
            Some(CrouchTransition::Crouched)
        } else if !crouch_held && self.is_crouching {
            self.is_crouching = false;
            self.retarget(self.standing_height, tweens);
            debug!("Stood up, view height {:.3}", self.view_height);
            Some(CrouchTransition::Stood)
        } else {
            None
        }
    }

    /// Duration needed to reach `target` from the current height.
    pub fn duration_to(&self, target: f32) -> f32 {
        if self.speed > 0.0 && self.speed.is_finite() {
            (target - self.view_height).abs() / self.speed
        } else {
            0.0
        }
    }

    fn retarget(&mut self, target: f32, tweens: &mut dyn Tweener) {
        if let Some(id) = self.active_animation.take() {
            if tweens.is_active(id) {
                tweens.cancel(id);
            }
        }

        let duration = self.duration_to(target);
        self.active_animation = Some(tweens.start(self.view_height, target, duration));
    }
}
