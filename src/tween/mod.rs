//! Scalar interpolation engine used for presentational animations.
//!
//! Animations never gate gameplay: whoever starts one treats its target
//! state as authoritative immediately and only reads sampled values back.

use std::collections::HashMap;

/// Handle to a running animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TweenId(u64);

/// Contract for an interpolation engine.
pub trait Tweener {
    /// Starts animating from `from` to `to` over `duration` seconds.
    fn start(&mut self, from: f32, to: f32, duration: f32) -> TweenId;

    /// True while the animation has not finished and was not cancelled.
    fn is_active(&self, id: TweenId) -> bool;

    /// Stops an animation. Unknown or finished handles are ignored.
    fn cancel(&mut self, id: TweenId);

    /// Steps every active animation and reports each sampled value.
    /// Animations that reach their end report the final value once and
    /// are then retired.
    fn advance(&mut self, dt: f32, on_update: &mut dyn FnMut(TweenId, f32));
}

#[derive(Debug, Clone)]
struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    fn sample(&self) -> f32 {
        if self.duration <= 0.0 {
            return self.to;
        }
        let t = (self.elapsed / self.duration).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * t
    }

    fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// Linear tween engine.
#[derive(Debug, Default)]
pub struct TweenEngine {
    tweens: HashMap<TweenId, Tween>,
    next_id: u64,
}

impl TweenEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> usize {
        self.tweens.len()
    }
}

impl Tweener for TweenEngine {
    fn start(&mut self, from: f32, to: f32, duration: f32) -> TweenId {
        let id = TweenId(self.next_id);
        self.next_id += 1;
        self.tweens.insert(
            id,
            Tween {
                from,
                to,
                duration: duration.max(0.0),
                elapsed: 0.0,
            },
        );
        id
    }

    fn is_active(&self, id: TweenId) -> bool {
        self.tweens.contains_key(&id)
    }

    fn cancel(&mut self, id: TweenId) {
        self.tweens.remove(&id);
    }

    fn advance(&mut self, dt: f32, on_update: &mut dyn FnMut(TweenId, f32)) {
        for (id, tween) in self.tweens.iter_mut() {
            tween.elapsed += dt;
            on_update(*id, tween.sample());
        }
        self.tweens.retain(|_, tween| !tween.finished());
    }
}
