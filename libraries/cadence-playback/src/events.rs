//! Transport Events
//!
//! Event-based communication for UI synchronization. The transport queues an
//! event for every state change; the UI layer drains them after each call.

use cadence_core::RepeatMode;
use serde::{Deserialize, Serialize};

/// Events emitted by the transport
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TransportEvent {
    /// Playing flag changed
    StateChanged {
        /// Whether audio should be playing
        is_playing: bool,
    },

    /// Current track replaced
    TrackChanged {
        /// ID of the new (current) track
        track_id: String,
        /// ID of the previous track (if any)
        previous_track_id: Option<String>,
    },

    /// Position reported by the backend or set by a seek
    PositionChanged { position_ms: u64 },

    /// Duration reported by the backend
    DurationChanged { duration_ms: u64 },

    /// Volume changed
    VolumeChanged {
        /// New volume level
        level: f32,
        /// Whether audio is muted
        is_muted: bool,
    },

    /// Repeat mode changed
    RepeatModeChanged { mode: RepeatMode },

    /// Shuffle toggled
    ShuffleChanged { enabled: bool },

    /// Queue changed (tracks added/removed/cleared)
    QueueChanged {
        /// New queue length
        length: usize,
    },
}
