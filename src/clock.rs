/// IntervalClock counts whole periods elapsed on the page clock, so a single
/// animation-frame loop can drive every fixed-cadence timer.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    period_ms: f64,
    start_ms: f64,      // page time when (re)started
    last_tick_idx: i64, // index of last reported whole period
}

impl IntervalClock {
    pub fn new(period_ms: f64, now: f64) -> Self {
        Self {
            period_ms,
            start_ms: now,
            last_tick_idx: 0,
        }
    }

    fn current_tick(&self, now: f64) -> f64 {
        (now - self.start_ms) / self.period_ms
    }

    /// Number of periods completed since the previous call. The first tick is
    /// due one full period after start.
    pub fn due(&mut self, now: f64) -> u64 {
        let whole = self.current_tick(now).floor() as i64;
        if whole <= self.last_tick_idx {
            return 0;
        }
        let fired = (whole - self.last_tick_idx) as u64;
        self.last_tick_idx = whole;
        fired
    }

    pub fn reset(&mut self, now: f64) {
        self.start_ms = now;
        self.last_tick_idx = 0;
    }
}
