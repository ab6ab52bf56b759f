//! Cadence Player Library
//!
//! Configuration, error types, and the application state that wires the
//! playback controller, library store, and source registry together.
//!
//! This library exposes the core components for testing purposes.

pub mod config;
pub mod error;
pub mod output;
pub mod state;

// Re-export commonly used types for convenience
pub use config::{InterfaceMode, PlaybackQuality, PlayerConfig};
pub use error::{AppError, Result};
pub use output::search_results_json;
pub use state::AppState;
