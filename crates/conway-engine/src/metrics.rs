//! Per-generation metrics and the poll-based engine snapshot.

/// Timing and size data for one committed generation.
///
/// Durations are in microseconds.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TickMetrics {
    /// Generation number after this step was applied.
    pub generation: u64,
    /// Number of cells that flipped.
    pub changed_cells: usize,
    /// Live cells after the step.
    pub population: usize,
    /// Time spent computing the diff from the working buffer.
    pub compute_us: u64,
    /// Time spent applying the diff to the visible board and the buffer.
    pub apply_us: u64,
}

/// A consistent, point-in-time view of the engine's published state.
///
/// Board-derived fields and `generation` are read under one lock, so
/// they always describe the same generation.
#[derive(Clone, Debug, PartialEq)]
pub struct EngineSnapshot {
    /// Generations applied since the last clear/randomize.
    pub generation: u64,
    /// Live cells on the visible board.
    pub population: usize,
    /// Board columns.
    pub width: u32,
    /// Board rows.
    pub height: u32,
    /// Whether the board wraps.
    pub infinite: bool,
    /// Whether the tick thread is running.
    pub running: bool,
    /// Requested generations per second.
    pub requested_rate: f64,
    /// Last measured generations per second; 0 when idle.
    pub measured_rate: f64,
}
