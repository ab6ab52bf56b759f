//! Core types for the playback transport

use cadence_core::{RepeatMode, Track};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default number of tracks kept in history
pub const DEFAULT_HISTORY_SIZE: usize = 20;

/// Default volume, also used when unmuting from a zero volume
pub const DEFAULT_VOLUME: f32 = 0.8;

/// Configuration for the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Maximum history size (default: 20)
    pub history_size: usize,

    /// Initial volume (0.0-1.0, default: 0.8)
    pub volume: f32,

    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Initial shuffle flag (default: false)
    pub shuffle: bool,

    /// Seed for shuffle selection (random seed when unset)
    pub shuffle_seed: Option<u64>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            history_size: DEFAULT_HISTORY_SIZE,
            volume: DEFAULT_VOLUME,
            repeat: RepeatMode::Off,
            shuffle: false,
            shuffle_seed: None,
        }
    }
}

/// Serializable copy of the full transport state, for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportSnapshot {
    pub current_track: Option<Track>,
    pub is_playing: bool,
    pub position: Duration,
    pub duration: Duration,
    pub volume: f32,
    pub is_muted: bool,
    pub repeat: RepeatMode,
    pub shuffle: bool,
    pub queue: Vec<Track>,
    pub history: Vec<Track>,
}
