//! State shared between the engine handle and its tick thread.
//!
//! # Locking
//!
//! - `visible` (`RwLock`) holds the authoritative board together with the
//!   generation counter, so readers always see a matching pair.
//! - `buffer` (`Mutex`) holds the working copy the next diff is computed
//!   from. Holding it also serializes steppers and external mutations.
//!
//! Lock order is always `buffer` then `visible`. A step computes its diff
//! while holding only `buffer`, so readers of `visible` are not blocked
//! during the O(width * height) scan.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::time::{Duration, Instant};

use conway_board::Board;
use parking_lot::{Mutex, RwLock};
use tracing::trace;

use crate::config::clamp_rate;
use crate::event::{ChangeCause, EngineEvent, EventHub};
use crate::metrics::{EngineSnapshot, TickMetrics};

/// An `f64` stored as bits in an `AtomicU64`.
pub(crate) struct AtomicF64(AtomicU64);

impl AtomicF64 {
    pub fn new(v: f64) -> Self {
        Self(AtomicU64::new(v.to_bits()))
    }

    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Acquire))
    }

    pub fn store(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Release);
    }
}

/// The authoritative board and the generation it is at.
pub(crate) struct Visible {
    pub board: Board,
    pub generation: u64,
}

pub(crate) struct SharedState {
    visible: RwLock<Visible>,
    buffer: Mutex<Board>,
    requested_rate: AtomicF64,
    measured_rate: AtomicF64,
    running: AtomicBool,
    last_metrics: Mutex<TickMetrics>,
    events: EventHub,
}

impl SharedState {
    pub fn new(board: Board, rate_hz: f64) -> Self {
        Self {
            buffer: Mutex::new(board.clone()),
            visible: RwLock::new(Visible {
                board,
                generation: 0,
            }),
            requested_rate: AtomicF64::new(clamp_rate(rate_hz).unwrap_or(rate_hz)),
            measured_rate: AtomicF64::new(0.0),
            running: AtomicBool::new(false),
            last_metrics: Mutex::new(TickMetrics::default()),
            events: EventHub::default(),
        }
    }

    // ── Stepping ────────────────────────────────────────────────

    /// Compute one generation from the buffer and commit it to both boards.
    pub fn step(&self) -> TickMetrics {
        let mut buffer = self.buffer.lock();

        let started = Instant::now();
        let diff = buffer.next_generation_diff();
        let computed = Instant::now();

        let (generation, population) = {
            let mut visible = self.visible.write();
            visible.board.apply(&diff);
            visible.generation += 1;
            (visible.generation, visible.board.population())
        };
        buffer.apply(&diff);
        debug_assert_eq!(buffer.population(), population);

        let metrics = TickMetrics {
            generation,
            changed_cells: diff.len(),
            population,
            compute_us: micros(computed - started),
            apply_us: micros(computed.elapsed()),
        };
        trace!(
            generation,
            changed = metrics.changed_cells,
            population,
            compute_us = metrics.compute_us,
            "generation committed"
        );
        *self.last_metrics.lock() = metrics.clone();
        // Published under the buffer lock so events stay in generation order.
        self.events.publish(EngineEvent::Stepped(metrics.clone()));
        metrics
    }

    // ── External mutation ───────────────────────────────────────

    /// Mutate the authoritative board and resync the buffer.
    pub fn mutate<R>(
        &self,
        cause: ChangeCause,
        reset_generation: bool,
        f: impl FnOnce(&mut Board) -> R,
    ) -> R {
        let mut buffer = self.buffer.lock();
        let mut visible = self.visible.write();
        let out = f(&mut visible.board);
        if reset_generation {
            visible.generation = 0;
        }
        buffer.clone_from(&visible.board);
        let event = EngineEvent::BoardChanged {
            cause,
            generation: visible.generation,
            population: visible.board.population(),
            width: visible.board.width(),
            height: visible.board.height(),
        };
        drop(visible);
        self.events.publish(event);
        out
    }

    // ── Reads ───────────────────────────────────────────────────

    pub fn read<R>(&self, f: impl FnOnce(&Visible) -> R) -> R {
        f(&self.visible.read())
    }

    pub fn snapshot(&self) -> EngineSnapshot {
        let visible = self.visible.read();
        EngineSnapshot {
            generation: visible.generation,
            population: visible.board.population(),
            width: visible.board.width(),
            height: visible.board.height(),
            infinite: visible.board.is_infinite(),
            running: self.is_running(),
            requested_rate: self.requested_rate(),
            measured_rate: self.measured_rate(),
        }
    }

    pub fn last_metrics(&self) -> TickMetrics {
        self.last_metrics.lock().clone()
    }

    // ── Rate and run state ──────────────────────────────────────

    pub fn requested_rate(&self) -> f64 {
        self.requested_rate.load()
    }

    /// Store a clamped rate. NaN is ignored. Returns the rate in effect.
    pub fn set_requested_rate(&self, rate_hz: f64) -> f64 {
        if let Some(rate) = clamp_rate(rate_hz) {
            self.requested_rate.store(rate);
            self.events.publish(EngineEvent::RateChanged { requested: rate });
        }
        self.requested_rate()
    }

    /// Minimum time between two committed ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.requested_rate())
    }

    /// Last measured rate, or 0 while idle.
    pub fn measured_rate(&self) -> f64 {
        if self.is_running() {
            self.measured_rate.load()
        } else {
            0.0
        }
    }

    pub fn record_measured_rate(&self, rate: f64) {
        self.measured_rate.store(rate);
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn set_running(&self, running: bool) {
        // Each run starts from no measurement.
        self.measured_rate.store(0.0);
        self.running.store(running, Ordering::Release);
        self.events.publish(if running {
            EngineEvent::Started
        } else {
            EngineEvent::Stopped
        });
    }

    pub fn events(&self) -> &EventHub {
        &self.events
    }
}

fn micros(d: Duration) -> u64 {
    u64::try_from(d.as_micros()).unwrap_or(u64::MAX)
}
