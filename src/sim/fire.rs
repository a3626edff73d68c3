//! Fire-control timing
//!
//! Two small pieces of clockwork: [`FrameClock`] turns the host's monotonic
//! per-frame timestamps into deltas (the first tick yields 0, never a
//! spurious huge delta), and [`FireTimer`] accumulates those deltas and
//! signals when the projectile cooldown has elapsed.

/// Cooldown-gated spawn timer
///
/// Accumulates frame time; [`FireTimer::advance`] returns `true` exactly
/// when the accumulated time reaches the cooldown, resetting the
/// accumulator to zero in the same call. The cooldown is fixed for one
/// session.
#[derive(Debug, Clone)]
pub struct FireTimer {
    cooldown: f32,
    accumulated: f32,
}

impl FireTimer {
    pub fn new(cooldown: f32) -> Self {
        Self {
            cooldown,
            accumulated: 0.0,
        }
    }

    /// Add frame time; `true` means fire now (the accumulator has reset)
    pub fn advance(&mut self, dt: f32) -> bool {
        self.accumulated += dt;
        if self.accumulated < self.cooldown {
            return false;
        }
        self.accumulated = 0.0;
        true
    }

    /// Time accrued toward the next shot
    pub fn accumulated(&self) -> f32 {
        self.accumulated
    }

    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }
}

/// Monotonic-timestamp to frame-delta conversion
///
/// The host reports absolute seconds each frame. Until the first timestamp
/// is established there is no meaningful delta, so the first call yields 0.
/// The previous timestamp is updated on every call regardless.
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    last: Option<f64>,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds elapsed since the previous call, 0 on the first
    pub fn delta(&mut self, timestamp: f64) -> f32 {
        let dt = match self.last {
            Some(previous) => (timestamp - previous) as f32,
            None => 0.0,
        };
        self.last = Some(timestamp);
        dt
    }
}
