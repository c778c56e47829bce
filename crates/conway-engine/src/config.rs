//! Engine configuration, validation, and error types.
//!
//! [`EngineConfig`] is the builder-input for constructing an
//! [`Engine`](crate::Engine). [`validate()`](EngineConfig::validate)
//! checks structural invariants once at construction; runtime commands
//! clamp their inputs instead of failing.

use std::error::Error;
use std::fmt;

use conway_board::{EdgeBehavior, DEFAULT_SIZE, MAX_SIZE, MIN_SIZE};

/// Slowest selectable generation rate, in generations per second.
pub const MIN_RATE_HZ: f64 = 1.0;
/// Fastest selectable generation rate, in generations per second.
pub const MAX_RATE_HZ: f64 = 20.0;
/// Generation rate of a freshly constructed engine.
pub const DEFAULT_RATE_HZ: f64 = 2.0;

/// Clamp a requested rate into `[MIN_RATE_HZ, MAX_RATE_HZ]`.
///
/// Returns `None` for NaN, which callers treat as "leave unchanged".
pub fn clamp_rate(rate_hz: f64) -> Option<f64> {
    if rate_hz.is_nan() {
        return None;
    }
    Some(rate_hz.clamp(MIN_RATE_HZ, MAX_RATE_HZ))
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`EngineConfig::validate()`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A board dimension is zero.
    ZeroDimension {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
    },
    /// `rate_hz` is NaN, infinite, zero, or negative.
    InvalidTickRate {
        /// The invalid value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension { name } => write!(f, "board {name} must be at least 1"),
            Self::InvalidTickRate { value } => {
                write!(f, "rate_hz must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── EngineConfig ───────────────────────────────────────────────────

/// Complete configuration for constructing an engine.
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Board columns. Default: 32.
    pub width: u32,
    /// Board rows. Default: 32.
    pub height: u32,
    /// Edge topology. Default: wrap.
    pub edge: EdgeBehavior,
    /// Target generations per second while running, clamped into
    /// `[MIN_RATE_HZ, MAX_RATE_HZ]`. Default: 2.
    pub rate_hz: f64,
    /// Live fraction of the initial board; 0 starts empty. Default: 0.
    pub initial_density: f64,
    /// Seed for the initial board. `None` draws one from the system RNG.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            edge: EdgeBehavior::Wrap,
            rate_hz: DEFAULT_RATE_HZ,
            initial_density: 0.0,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// A default config with the given board size.
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Clamp a presentation-chosen side length into `[MIN_SIZE, MAX_SIZE]`.
    pub fn clamp_size(side: u32) -> u32 {
        side.clamp(MIN_SIZE, MAX_SIZE)
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroDimension { name: "width" });
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroDimension { name: "height" });
        }
        if !self.rate_hz.is_finite() || self.rate_hz <= 0.0 {
            return Err(ConfigError::InvalidTickRate {
                value: self.rate_hz,
            });
        }
        Ok(())
    }
}
