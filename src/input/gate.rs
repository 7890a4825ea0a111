//! Double-press gate for the overlay toggle key.
//!
//! The toggle key is an ordinary typing key, so a single accidental press
//! must not open the overlay. The first press while the overlay is hidden
//! arms a short window; a second press inside the window fires the toggle.
//! While the overlay is already visible a single press always fires, and
//! any non-toggle key cancels a pending window.
//!
//! The gate is an explicit `Instant`-deadline value owned by the input
//! processor. Nothing blocks: expiry is observed by comparing timestamps
//! on the next press, and cancel-on-supersede is a plain field reset.

use std::time::{Duration, Instant};

/// Default arming window for the toggle key.
pub const DEFAULT_TOGGLE_WINDOW: Duration = Duration::from_millis(200);

/// Detects an intentional double press of the overlay toggle key.
#[derive(Debug, Clone)]
pub struct DoublePressGate {
    /// Length of the arming window
    window: Duration,
    /// When the window was last armed, if at all
    armed_at: Option<Instant>,
}

impl Default for DoublePressGate {
    fn default() -> Self {
        Self::new(DEFAULT_TOGGLE_WINDOW)
    }
}

impl DoublePressGate {
    /// Create a gate with the given arming window.
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            armed_at: None,
        }
    }

    /// Register a press of the toggle key.
    ///
    /// Returns `true` when the toggle should fire: the gate was already
    /// armed and the window has not expired, or the overlay is visible
    /// (hiding never needs confirmation). Otherwise the press arms (or
    /// re-arms) the window and the toggle stays suppressed.
    pub fn register_toggle(&mut self, now: Instant, overlay_visible: bool) -> bool {
        let armed = self
            .armed_at
            .is_some_and(|armed_at| now.duration_since(armed_at) <= self.window);

        if armed || overlay_visible {
            true
        } else {
            self.armed_at = Some(now);
            false
        }
    }

    /// Cancel a pending window. Called for every non-toggle key press.
    pub fn cancel(&mut self) {
        self.armed_at = None;
    }

    /// Whether the gate is currently armed relative to `now`.
    pub fn is_armed(&self, now: Instant) -> bool {
        self.armed_at
            .is_some_and(|armed_at| now.duration_since(armed_at) <= self.window)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(200);

    #[test]
    fn single_press_only_arms() {
        let mut gate = DoublePressGate::new(WINDOW);
        let now = Instant::now();
        assert!(!gate.register_toggle(now, false));
        assert!(gate.is_armed(now));
    }

    #[test]
    fn second_press_inside_window_fires() {
        let mut gate = DoublePressGate::new(WINDOW);
        let now = Instant::now();
        assert!(!gate.register_toggle(now, false));
        assert!(gate.register_toggle(now + Duration::from_millis(120), false));
    }

    #[test]
    fn expired_window_rearms_instead_of_firing() {
        let mut gate = DoublePressGate::new(WINDOW);
        let now = Instant::now();
        assert!(!gate.register_toggle(now, false));
        let late = now + Duration::from_millis(500);
        assert!(!gate.register_toggle(late, false));
        // The late press re-armed: a followup inside the window fires
        assert!(gate.register_toggle(late + Duration::from_millis(50), false));
    }

    #[test]
    fn visible_overlay_fires_on_single_press() {
        let mut gate = DoublePressGate::new(WINDOW);
        assert!(gate.register_toggle(Instant::now(), true));
    }

    #[test]
    fn cancel_disarms_a_pending_window() {
        let mut gate = DoublePressGate::new(WINDOW);
        let now = Instant::now();
        assert!(!gate.register_toggle(now, false));
        gate.cancel();
        assert!(!gate.register_toggle(now + Duration::from_millis(50), false));
    }
}
