/// Frame-driven timer that paces simulation ticks.
///
/// Arming primes the timer so the next `advance` fires without waiting a
/// full interval; so does changing the rate while armed. At most one tick
/// fires per `advance`, with no catch-up backlog after long frames.
pub struct TickTimer {
    interval: f32,
    elapsed: f32,
    armed: bool,
}

impl TickTimer {
    pub fn new(generations_per_second: f32) -> Self {
        Self {
            interval: 1.0 / generations_per_second,
            elapsed: 0.0,
            armed: false,
        }
    }

    /// Start ticking; the first tick fires on the next `advance`
    pub fn arm(&mut self) {
        self.armed = true;
        self.elapsed = self.interval;
    }

    /// Stop ticking and discard accumulated time
    pub fn cancel(&mut self) {
        self.armed = false;
        self.elapsed = 0.0;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Change pacing. While armed this fires on the next `advance` instead
    /// of waiting out the old interval.
    pub fn set_rate(&mut self, generations_per_second: f32) {
        self.interval = 1.0 / generations_per_second;
        if self.armed {
            self.elapsed = self.interval;
        }
    }

    /// Accumulate frame time; returns true when a tick is due
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.armed {
            return false;
        }
        self.elapsed += dt;
        if self.elapsed >= self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }
}
