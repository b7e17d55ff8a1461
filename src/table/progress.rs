use std::time::Instant;

/// Tracks a long export and logs a line whenever
/// PROGRESS_INTERVAL has passed since the last one.
pub struct Progress {
    total: usize,
    ticks: usize,
    begin: Instant,
    delta: Instant,
    since: usize,
}

impl Progress {
    pub fn new(total: usize) -> Self {
        let now = Instant::now();
        Self {
            total,
            ticks: 0,
            begin: now,
            delta: now,
            since: 0,
        }
    }
    pub fn tick(&mut self) {
        self.advance(1);
    }
    fn advance(&mut self, n: usize) {
        self.ticks += n;
        if self.delta.elapsed() >= crate::PROGRESS_INTERVAL {
            self.checkpoint();
        }
    }
    /// log unconditionally
    pub fn checkpoint(&mut self) {
        let now = Instant::now();
        let total_t = now.duration_since(self.begin);
        let delta_t = now.duration_since(self.delta);
        log::info!(
            "progress: {:8.0?} {:>10} {:6.2}%   mean {:8.0}   last {:8.0}",
            total_t,
            self.ticks,
            self.ticks as f32 / self.total.max(1) as f32 * 100f32,
            self.ticks as f32 / total_t.as_secs_f32().max(f32::EPSILON),
            (self.ticks - self.since) as f32 / delta_t.as_secs_f32().max(f32::EPSILON),
        );
        self.delta = now;
        self.since = self.ticks;
    }
}
