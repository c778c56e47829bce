//! The simulation controller.
//!
//! [`Engine`] owns the board, the generation counter, and an optional
//! background tick thread. Every command is safe to call while the tick
//! thread is running: board mutations are serialized with generation
//! steps and queries never observe a half-applied generation.

use std::error::Error;
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use conway_board::{clamp_density, Board, EdgeBehavior};
use conway_core::{Cell, Coord};
use crossbeam_channel::Receiver;
use tracing::{debug, warn};

use crate::config::{ConfigError, EngineConfig};
use crate::event::{ChangeCause, EngineEvent};
use crate::metrics::{EngineSnapshot, TickMetrics};
use crate::state::SharedState;
use crate::tick_thread::TickThreadState;

// ── EngineError ────────────────────────────────────────────────────

/// Errors from runtime engine commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// The OS refused to spawn the tick thread.
    ThreadSpawnFailed {
        /// The underlying I/O error, rendered.
        reason: String,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ThreadSpawnFailed { reason } => {
                write!(f, "failed to spawn tick thread: {reason}")
            }
        }
    }
}

impl Error for EngineError {}

// ── Engine ─────────────────────────────────────────────────────────

struct RunHandle {
    flag: Arc<AtomicBool>,
    thread: JoinHandle<()>,
}

/// A Game of Life board plus the machinery to advance it over time.
///
/// # Example
///
/// ```
/// use conway_core::Coord;
/// use conway_engine::{Engine, EngineConfig};
///
/// let mut engine = Engine::new(EngineConfig::with_size(8, 8)).unwrap();
/// for x in 1..4 {
///     engine.toggle_cell(Coord::new(x, 2));
/// }
/// engine.step();
/// assert_eq!(engine.generation(), 1);
/// assert_eq!(engine.population(), 3);
/// assert!(engine.cell_at(Coord::new(2, 1)).unwrap().is_alive());
/// ```
pub struct Engine {
    shared: Arc<SharedState>,
    run: Option<RunHandle>,
    /// Threads told to stop but not yet joined.
    stopped: Vec<JoinHandle<()>>,
}

impl Engine {
    /// Build an engine from a validated config.
    ///
    /// With a positive `initial_density` the board starts randomized
    /// from `seed` (or a fresh system seed).
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let density = clamp_density(config.initial_density);
        let mut board = if density > 0.0 {
            let seed = config.seed.unwrap_or_else(rand::random::<u64>);
            Board::random(config.width, config.height, density, seed)
        } else {
            Board::new(config.width, config.height)
        };
        board.set_edge(config.edge);
        debug!(
            width = config.width,
            height = config.height,
            edge = ?config.edge,
            rate_hz = config.rate_hz,
            population = board.population(),
            "engine created"
        );
        Ok(Self {
            shared: Arc::new(SharedState::new(board, config.rate_hz)),
            run: None,
            stopped: Vec::new(),
        })
    }

    // ── Run control ─────────────────────────────────────────────

    /// Start the tick thread. No-op if already running.
    pub fn start(&mut self) -> Result<(), EngineError> {
        if self.run.is_some() {
            return Ok(());
        }
        self.reap_stopped();

        let flag = Arc::new(AtomicBool::new(true));
        let state = TickThreadState::new(Arc::clone(&self.shared), Arc::clone(&flag));
        let thread = thread::Builder::new()
            .name("conway-tick".into())
            .spawn(move || state.run())
            .map_err(|e| EngineError::ThreadSpawnFailed {
                reason: e.to_string(),
            })?;

        self.run = Some(RunHandle { flag, thread });
        self.shared.set_running(true);
        debug!(rate_hz = self.shared.requested_rate(), "tick thread started");
        Ok(())
    }

    /// Ask the tick thread to stop. Returns without waiting for it.
    ///
    /// No-op if not running. A generation already in progress may still
    /// commit; no further ones will.
    pub fn stop(&mut self) {
        let Some(run) = self.run.take() else {
            return;
        };
        run.flag.store(false, Ordering::Release);
        run.thread.thread().unpark();
        self.stopped.push(run.thread);
        self.shared.set_running(false);
        debug!("tick thread stopped");
    }

    /// Start if stopped, stop if running.
    pub fn toggle_running(&mut self) -> Result<(), EngineError> {
        if self.run.is_some() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// Advance exactly one generation, whether or not the thread runs.
    pub fn step(&self) -> TickMetrics {
        self.shared.step()
    }

    // ── Board commands ──────────────────────────────────────────

    /// Resize, keeping the overlap. The generation counter is kept.
    pub fn resize(&self, width: u32, height: u32) {
        let width = width.max(1);
        let height = height.max(1);
        self.shared
            .mutate(ChangeCause::Resize, false, |b| b.resize(width, height));
        debug!(width, height, "board resized");
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&self) {
        self.shared.mutate(ChangeCause::Clear, true, Board::clear);
        debug!("board cleared");
    }

    /// Replace the board with a random one of the same size.
    ///
    /// Returns the seed used so the board can be reproduced.
    pub fn randomize(&self, density: f64) -> u64 {
        let seed = rand::random::<u64>();
        self.randomize_with_seed(density, seed);
        seed
    }

    /// Replace the board with the random board `seed` produces.
    pub fn randomize_with_seed(&self, density: f64, seed: u64) {
        let population = self.shared.mutate(ChangeCause::Randomize, true, |b| {
            let mut fresh = Board::random(b.width(), b.height(), density, seed);
            fresh.set_edge(b.edge());
            *b = fresh;
            b.population()
        });
        debug!(density, seed, population, "board randomized");
    }

    /// Flip the cell at `point`. Off-board points are ignored.
    pub fn toggle_cell(&self, point: Coord) -> Option<Cell> {
        self.shared
            .mutate(ChangeCause::CellEdit, false, |b| b.toggle_cell(point))
    }

    /// Set the cell at `point`. Returns whether anything changed.
    pub fn set_cell(&self, cell: Cell, point: Coord) -> bool {
        self.shared
            .mutate(ChangeCause::CellEdit, false, |b| b.set_cell(cell, point))
    }

    /// Switch between a wrapping and an absorbing border.
    pub fn set_infinite(&self, infinite: bool) {
        self.shared
            .mutate(ChangeCause::Topology, false, |b| b.set_infinite(infinite));
    }

    /// Change the edge behavior.
    pub fn set_edge(&self, edge: EdgeBehavior) {
        self.shared
            .mutate(ChangeCause::Topology, false, |b| b.set_edge(edge));
    }

    /// Request a new rate; clamped into range, NaN ignored.
    ///
    /// Returns the rate now in effect.
    pub fn set_requested_rate(&self, rate_hz: f64) -> f64 {
        self.shared.set_requested_rate(rate_hz)
    }

    // ── Queries ─────────────────────────────────────────────────

    /// Board columns.
    pub fn width(&self) -> u32 {
        self.shared.read(|v| v.board.width())
    }

    /// Board rows.
    pub fn height(&self) -> u32 {
        self.shared.read(|v| v.board.height())
    }

    /// Live cells on the visible board.
    pub fn population(&self) -> usize {
        self.shared.read(|v| v.board.population())
    }

    /// State of the cell at `point`, resolved through the edge behavior.
    pub fn cell_at(&self, point: Coord) -> Option<Cell> {
        self.shared.read(|v| v.board.cell_at(point))
    }

    /// Generations committed since the last clear or randomize.
    pub fn generation(&self) -> u64 {
        self.shared.read(|v| v.generation)
    }

    /// Whether the board wraps.
    pub fn is_infinite(&self) -> bool {
        self.shared.read(|v| v.board.is_infinite())
    }

    /// Whether the tick thread is running.
    pub fn is_running(&self) -> bool {
        self.shared.is_running()
    }

    /// Requested generations per second.
    pub fn requested_rate(&self) -> f64 {
        self.shared.requested_rate()
    }

    /// Last measured generations per second, or 0 while stopped.
    pub fn measured_rate(&self) -> f64 {
        self.shared.measured_rate()
    }

    /// Metrics of the most recently committed generation.
    pub fn last_metrics(&self) -> TickMetrics {
        self.shared.last_metrics()
    }

    /// All published state read at once.
    pub fn snapshot(&self) -> EngineSnapshot {
        self.shared.snapshot()
    }

    /// Text rendering of the visible board.
    pub fn render(&self) -> String {
        self.shared.read(|v| v.board.render())
    }

    /// Run `f` against the visible board under the read lock.
    ///
    /// Steps wait until `f` returns, so keep it short.
    pub fn with_board<R>(&self, f: impl FnOnce(&Board) -> R) -> R {
        self.shared.read(|v| f(&v.board))
    }

    /// A copy of the visible board.
    pub fn board(&self) -> Board {
        self.with_board(Board::clone)
    }

    /// Receive [`EngineEvent`]s from now on.
    ///
    /// At most [`EVENT_QUEUE_CAPACITY`](crate::EVENT_QUEUE_CAPACITY)
    /// events are held per subscriber; further events are dropped for it
    /// until it drains. Poll [`Engine::snapshot`] to resync after lagging.
    pub fn subscribe(&self) -> Receiver<EngineEvent> {
        self.shared.events().subscribe()
    }

    fn reap_stopped(&mut self) {
        for handle in self.stopped.drain(..) {
            if handle.join().is_err() {
                warn!("tick thread panicked");
            }
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            shared: Arc::new(SharedState::new(
                Board::default(),
                crate::config::DEFAULT_RATE_HZ,
            )),
            run: None,
            stopped: Vec::new(),
        }
    }
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("snapshot", &self.snapshot())
            .finish_non_exhaustive()
    }
}

impl Drop for Engine {
    fn drop(&mut self) {
        self.stop();
        self.reap_stopped();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, Instant};

    fn blinker_engine() -> Engine {
        let engine = Engine::new(EngineConfig::with_size(8, 8)).unwrap();
        for x in 1..4 {
            engine.set_cell(Cell::Alive, Coord::new(x, 3));
        }
        engine
    }

    fn wait_for(mut cond: impl FnMut() -> bool) -> bool {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            if cond() {
                return true;
            }
            thread::sleep(Duration::from_millis(5));
        }
        cond()
    }

    #[test]
    fn new_engine_is_idle_and_empty() {
        let engine = Engine::new(EngineConfig::default()).unwrap();
        assert_eq!((engine.width(), engine.height()), (32, 32));
        assert_eq!(engine.population(), 0);
        assert_eq!(engine.generation(), 0);
        assert!(!engine.is_running());
        assert!(engine.is_infinite());
        assert_eq!(engine.requested_rate(), 2.0);
        assert_eq!(engine.measured_rate(), 0.0);
    }

    #[test]
    fn invalid_config_rejected() {
        let err = Engine::new(EngineConfig::with_size(0, 4)).unwrap_err();
        assert_eq!(err, ConfigError::ZeroDimension { name: "width" });
    }

    #[test]
    fn seeded_config_is_reproducible() {
        let config = EngineConfig {
            initial_density: 0.25,
            seed: Some(42),
            ..EngineConfig::with_size(16, 16)
        };
        let a = Engine::new(config.clone()).unwrap();
        let b = Engine::new(config).unwrap();
        assert_eq!(a.board(), b.board());
        assert_eq!(a.population(), 64);
    }

    #[test]
    fn config_edge_is_applied() {
        let config = EngineConfig {
            edge: EdgeBehavior::Absorb,
            initial_density: 0.5,
            seed: Some(1),
            ..EngineConfig::with_size(10, 10)
        };
        let engine = Engine::new(config).unwrap();
        assert!(!engine.is_infinite());
    }

    #[test]
    fn step_advances_generation() {
        let engine = blinker_engine();
        let m = engine.step();
        assert_eq!(m.generation, 1);
        assert_eq!(m.changed_cells, 4);
        assert_eq!(engine.generation(), 1);
        assert!(engine.cell_at(Coord::new(2, 2)).unwrap().is_alive());
        assert_eq!(engine.last_metrics(), m);
    }

    #[test]
    fn clear_and_randomize_reset_generation_resize_keeps_it() {
        let engine = blinker_engine();
        engine.step();
        engine.step();
        engine.resize(12, 10);
        assert_eq!(engine.generation(), 2);
        assert_eq!((engine.width(), engine.height()), (12, 10));

        engine.randomize_with_seed(0.5, 9);
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 60);

        engine.step();
        engine.clear();
        assert_eq!(engine.generation(), 0);
        assert_eq!(engine.population(), 0);
    }

    #[test]
    fn randomize_keeps_edge_behavior() {
        let engine = blinker_engine();
        engine.set_infinite(false);
        engine.randomize_with_seed(0.3, 5);
        assert!(!engine.is_infinite());
    }

    #[test]
    fn randomize_with_same_seed_matches() {
        let engine = blinker_engine();
        let seed = engine.randomize(0.4);
        let first = engine.board();
        engine.clear();
        engine.randomize_with_seed(0.4, seed);
        assert_eq!(engine.board(), first);
    }

    #[test]
    fn toggle_cell_out_of_bounds_is_ignored() {
        let engine = blinker_engine();
        engine.set_infinite(false);
        assert_eq!(engine.toggle_cell(Coord::new(-1, 0)), None);
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn toggle_cell_wraps_on_torus() {
        let engine = blinker_engine();
        assert_eq!(engine.toggle_cell(Coord::new(-1, 0)), Some(Cell::Alive));
        assert!(engine.cell_at(Coord::new(7, 0)).unwrap().is_alive());
    }

    #[test]
    fn requested_rate_is_clamped() {
        let engine = blinker_engine();
        assert_eq!(engine.set_requested_rate(0.0), 1.0);
        assert_eq!(engine.set_requested_rate(50.0), 20.0);
        assert_eq!(engine.set_requested_rate(f64::NAN), 20.0);
        assert_eq!(engine.set_requested_rate(5.0), 5.0);
        assert_eq!(engine.requested_rate(), 5.0);
    }

    #[test]
    fn toggle_running_twice_is_identity() {
        let mut engine = blinker_engine();
        engine.set_requested_rate(1.0);
        engine.toggle_running().unwrap();
        assert!(engine.is_running());
        engine.toggle_running().unwrap();
        assert!(!engine.is_running());
        assert_eq!(engine.generation(), 0);
    }

    #[test]
    fn start_is_idempotent() {
        let mut engine = blinker_engine();
        engine.set_requested_rate(1.0);
        engine.start().unwrap();
        engine.start().unwrap();
        assert!(engine.is_running());
        engine.stop();
        engine.stop();
        assert!(!engine.is_running());
    }

    #[test]
    fn running_engine_ticks() {
        let mut engine = blinker_engine();
        engine.set_requested_rate(20.0);
        engine.start().unwrap();
        assert!(wait_for(|| engine.generation() >= 3));
        assert!(wait_for(|| engine.measured_rate() > 0.0));
        engine.stop();
        assert_eq!(engine.measured_rate(), 0.0);
        assert_eq!(engine.population(), 3);
    }

    #[test]
    fn subscribers_see_run_events() {
        let mut engine = blinker_engine();
        let rx = engine.subscribe();
        engine.set_requested_rate(1.0);
        engine.start().unwrap();
        engine.stop();
        let events: Vec<_> = rx.try_iter().collect();
        assert_eq!(
            events,
            vec![
                EngineEvent::RateChanged { requested: 1.0 },
                EngineEvent::Started,
                EngineEvent::Stopped,
            ]
        );
    }

    #[test]
    fn restart_reports_no_stale_measured_rate() {
        let mut engine = blinker_engine();
        engine.set_requested_rate(20.0);
        engine.start().unwrap();
        assert!(wait_for(|| engine.measured_rate() > 0.0));
        engine.stop();
        engine.set_requested_rate(1.0);
        engine.start().unwrap();
        // No tick of the new run has happened yet at 1 Hz.
        assert_eq!(engine.measured_rate(), 0.0);
        engine.stop();
    }

    #[test]
    fn drop_while_running_joins_thread() {
        let mut engine = blinker_engine();
        engine.set_requested_rate(1.0);
        engine.start().unwrap();
        let started = Instant::now();
        drop(engine);
        assert!(started.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn engine_error_display() {
        let e = EngineError::ThreadSpawnFailed {
            reason: "out of threads".into(),
        };
        assert_eq!(e.to_string(), "failed to spawn tick thread: out of threads");
    }
}
