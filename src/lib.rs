/// Agent loop and episodic Bellman training
pub mod algo;

/// Function approximators
pub mod approx;

/// Agent configuration
pub mod config;

/// Data structures
pub mod ds;

/// Perception and embodiment collaborators
pub mod env;

/// Error types
pub mod error;

/// Exploration schedule and softmax action selection
pub mod exploration;

/// Experience replay
pub mod memory;

/// Episode counters and read-only reports
pub mod stats;

/// Tensor conversions
pub mod traits;

/// Testing environments
#[cfg(feature = "gym")]
pub mod gym;

mod util;

pub use error::{Error, Result};
