use crate::{PROGRESS_INTERVAL, PROGRESS_STRIDE};
use std::sync::Mutex;
use std::sync::atomic::AtomicU64;
use std::sync::atomic::Ordering;
use std::time::{Duration, Instant};

/// Throughput logging shared by every worker of a run.
///
/// Workers report boards as they finish them. A message is logged at most
/// once per [`PROGRESS_INTERVAL`], and the clock is only consulted when the
/// count crosses a [`PROGRESS_STRIDE`] boundary.
pub struct Progress {
    total: u64,
    ticks: AtomicU64,
    begin: Instant,
    delta: Mutex<(Instant, u64)>,
}

impl Progress {
    pub fn new(total: u64) -> Self {
        let now = Instant::now();
        Self {
            total,
            ticks: AtomicU64::new(0),
            begin: now,
            delta: Mutex::new((now, 0)),
        }
    }
    pub fn ticks(&self) -> u64 {
        self.ticks.load(Ordering::Relaxed)
    }
    pub fn elapsed(&self) -> Duration {
        self.begin.elapsed()
    }
    pub fn tick(&self, n: u64) {
        let stride = PROGRESS_STRIDE as u64;
        let before = self.ticks.fetch_add(n, Ordering::Relaxed);
        let after = before + n;
        if before / stride == after / stride {
            return;
        }
        let Ok(mut delta) = self.delta.try_lock() else {
            return;
        };
        let now = Instant::now();
        let (last, seen) = *delta;
        if now.duration_since(last) < PROGRESS_INTERVAL {
            return;
        }
        *delta = (now, after);
        let total_t = now.duration_since(self.begin);
        let delta_t = now.duration_since(last);
        log::info!(
            "progress: {:8.0?} {:>10} {:6.2}%   mean {:8.0}/s   last {:8.0}/s",
            total_t,
            after,
            after as f32 / self.total.max(1) as f32 * 100f32,
            after as f32 / total_t.as_secs_f32(),
            after.saturating_sub(seen) as f32 / delta_t.as_secs_f32(),
        );
    }
}
