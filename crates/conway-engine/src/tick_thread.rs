//! Background generation loop.
//!
//! The tick thread shares the engine's [`SharedState`] and commits one
//! generation per requested interval. It re-reads the requested rate
//! every iteration, so rate changes take effect on the next tick. Each
//! run gets its own stop flag; the engine unparks the thread after
//! clearing it so a stop never waits for a full interval.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;

use crate::state::SharedState;

/// State held by the tick thread's main loop.
pub(crate) struct TickThreadState {
    shared: Arc<SharedState>,
    run_flag: Arc<AtomicBool>,
}

impl TickThreadState {
    pub fn new(shared: Arc<SharedState>, run_flag: Arc<AtomicBool>) -> Self {
        Self { shared, run_flag }
    }

    /// Main tick loop. Runs until the run flag is cleared.
    ///
    /// The first generation is committed one interval after start.
    pub fn run(self) {
        let mut last_tick = Instant::now();
        while self.run_flag.load(Ordering::Acquire) {
            let interval = self.shared.tick_interval();
            let elapsed = last_tick.elapsed();
            if let Some(remaining) = interval.checked_sub(elapsed) {
                if !remaining.is_zero() {
                    thread::park_timeout(remaining);
                    continue;
                }
            }

            // A stop may have landed while parked; a stopped run must not
            // publish a rate.
            if !self.run_flag.load(Ordering::Acquire) {
                break;
            }
            let now = Instant::now();
            let since_last = now.duration_since(last_tick).as_secs_f64();
            last_tick = now;
            if since_last > 0.0 {
                self.shared.record_measured_rate(1.0 / since_last);
            }
            self.shared.step();
        }
    }
}
