use std::time::{Duration, Instant};

/// Auto-repeat state for one held key.
///
/// A press fires at once; holding it fires again every `interval` once
/// `delay` has passed; releasing re-arms.
#[derive(Clone, Copy, Debug)]
pub struct HoldTimer {
    pressed: bool,
    since: Instant,
    last_repeat: Instant,
}

impl HoldTimer {
    pub fn new(now: Instant) -> Self {
        Self {
            pressed: false,
            since: now,
            last_repeat: now,
        }
    }

    /// Feed the key's current state; true when its action should run.
    pub fn poll(&mut self, down: bool, now: Instant, delay: Duration, interval: Duration) -> bool {
        if !down {
            self.pressed = false;
            return false;
        }
        if !self.pressed {
            self.pressed = true;
            self.since = now;
            self.last_repeat = now;
            return true;
        }
        if now - self.since > delay && now - self.last_repeat > interval {
            self.last_repeat = now;
            return true;
        }
        false
    }
}
