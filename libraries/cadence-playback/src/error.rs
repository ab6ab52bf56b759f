//! Error types for the audio backend boundary
//!
//! Transport operations never fail; these errors only travel between an
//! [`AudioBackend`](crate::AudioBackend) and the controller, which logs them.

use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Backend could not load the track
    #[error("Failed to load track {track_id}: {reason}")]
    Load { track_id: String, reason: String },

    /// Backend could not start audio output
    #[error("Playback failed: {0}")]
    Playback(String),

    /// Operation needs a loaded track
    #[error("No track loaded")]
    NoTrackLoaded,
}

/// Result type for backend operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
