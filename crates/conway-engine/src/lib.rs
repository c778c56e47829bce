//! Simulation controller for the Conway life simulator.
//!
//! Provides the [`Engine`] that owns a [`Board`](conway_board::Board),
//! counts generations, and optionally advances the board from a
//! background tick thread at a requested rate. Presentation layers
//! either poll [`Engine::snapshot`] or subscribe to [`EngineEvent`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod event;
pub mod metrics;
mod state;
mod tick_thread;

pub use config::{
    clamp_rate, ConfigError, EngineConfig, DEFAULT_RATE_HZ, MAX_RATE_HZ, MIN_RATE_HZ,
};
pub use engine::{Engine, EngineError};
pub use event::{ChangeCause, EngineEvent, EVENT_QUEUE_CAPACITY};
pub use metrics::{EngineSnapshot, TickMetrics};
