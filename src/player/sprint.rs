//! Double-tap-forward sprint gesture.
//!
//! Pressing forward twice within the window starts a sprint that lasts
//! until forward is released.
//!
//! A tap that never gets its second press is not expired by time. It stays
//! armed until the next press, which is then judged against it.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SprintDetector {
    window: f32,
    is_sprinting: bool,
    is_forward_held: bool,
    awaiting_second_tap: bool,
    last_tap_time: f32,
}

impl SprintDetector {
    pub fn new(window: f32) -> Self {
        Self {
            window,
            is_sprinting: false,
            is_forward_held: false,
            awaiting_second_tap: false,
            last_tap_time: 0.0,
        }
    }

    pub fn is_sprinting(&self) -> bool {
        self.is_sprinting
    }

    pub fn is_forward_held(&self) -> bool {
        self.is_forward_held
    }

    pub fn awaiting_second_tap(&self) -> bool {
        self.awaiting_second_tap
    }

    pub fn last_tap_time(&self) -> f32 {
        self.last_tap_time
    }

    /// Feeds this tick's forward axis value at time `now` (seconds).
    pub fn update(&mut self, forward: f32, now: f32) {
        if forward > 0.0 && !self.is_forward_held {
            self.is_forward_held = true;

            if self.awaiting_second_tap && now - self.last_tap_time <= self.window {
                self.is_sprinting = true;
                self.awaiting_second_tap = false;
                self.last_tap_time = 0.0;
                debug!("Sprint started");
            } else {
                self.awaiting_second_tap = true;
                self.last_tap_time = now;
            }
        } else if forward == 0.0 {
            self.is_forward_held = false;

            if self.is_sprinting {
                self.is_sprinting = false;
                debug!("Sprint ended");
            }
        }
    }

    /// Drops an active sprint without touching the tap bookkeeping.
    pub fn cancel(&mut self) {
        self.is_sprinting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap(detector: &mut SprintDetector, at: f32) {
        detector.update(1.0, at);
        detector.update(0.0, at + 0.05);
    }

    #[test]
    fn test_double_tap_within_window_sprints() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);
        assert!(!detector.is_sprinting());
        assert!(detector.awaiting_second_tap());

        detector.update(1.0, 0.2);
        assert!(detector.is_sprinting());
        assert!(!detector.awaiting_second_tap());
    }

    #[test]
    fn test_double_tap_outside_window_rearms() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);

        detector.update(1.0, 0.3);
        assert!(!detector.is_sprinting());
        assert!(detector.awaiting_second_tap());
        assert_eq!(detector.last_tap_time(), 0.3);
    }

    #[test]
    fn test_window_edge_is_inclusive() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 1.0);
        detector.update(1.0, 1.25);
        assert!(detector.is_sprinting());
    }

    #[test]
    fn test_holding_forward_does_not_retrigger() {
        let mut detector = SprintDetector::new(0.25);
        detector.update(1.0, 0.0);
        detector.update(1.0, 0.1);
        detector.update(0.5, 0.2);
        assert!(!detector.is_sprinting());
        assert!(detector.is_forward_held());
        assert_eq!(detector.last_tap_time(), 0.0);
    }

    #[test]
    fn test_release_ends_sprint() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);
        detector.update(1.0, 0.1);
        assert!(detector.is_sprinting());

        detector.update(0.0, 2.0);
        assert!(!detector.is_sprinting());
        assert!(!detector.is_forward_held());
    }

    #[test]
    fn test_backward_input_neither_taps_nor_releases() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);
        detector.update(1.0, 0.1);
        assert!(detector.is_sprinting());

        // Going straight from forward to backward keeps the held flag and sprint
        detector.update(-1.0, 0.2);
        assert!(detector.is_sprinting());
        assert!(detector.is_forward_held());
    }

    #[test]
    fn test_cancel_keeps_tap_state() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);
        detector.update(1.0, 0.1);
        detector.cancel();
        assert!(!detector.is_sprinting());
        assert!(detector.is_forward_held());
    }

    #[test]
    fn test_stale_tap_stays_armed() {
        let mut detector = SprintDetector::new(0.25);
        tap(&mut detector, 0.0);

        // Nothing expires the pending tap; the next press is judged against it
        assert!(detector.awaiting_second_tap());
        detector.update(1.0, 10.0);
        assert!(!detector.is_sprinting());
        assert_eq!(detector.last_tap_time(), 10.0);
    }
}
