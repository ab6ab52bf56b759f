//! Playback transport - core state machine
//!
//! Owns current track, play/pause, position, duration, volume, repeat,
//! shuffle, queue, and history

use crate::{
    events::TransportEvent,
    history::History,
    queue::Queue,
    shuffle::select_next,
    types::{TransportConfig, TransportSnapshot},
    volume::Volume,
};
use cadence_core::{RepeatMode, Track};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::debug;

/// Central playback state
///
/// States are implicit in the fields: no current track is idle, otherwise
/// the `is_playing` flag distinguishes loaded+paused from loaded+playing.
///
/// Every operation is total. Empty queues and histories make `play_next`
/// and `play_previous` no-ops rather than errors. The transport does not
/// measure time or talk to audio hardware; position and duration arrive
/// from the backend through [`set_current_time`](Self::set_current_time)
/// and [`set_duration`](Self::set_duration).
#[derive(Debug)]
pub struct Transport {
    // State
    current_track: Option<Track>,
    is_playing: bool,
    position: Duration,
    duration: Duration,

    // Queue and history
    queue: Queue,
    history: History,

    // Settings
    volume: Volume,
    repeat: RepeatMode,
    shuffle: bool,

    // Shuffle selection
    rng: StdRng,

    // Event queue for UI synchronization
    pending_events: Vec<TransportEvent>,
}

impl Transport {
    /// Create new transport in the idle state
    pub fn new(config: TransportConfig) -> Self {
        let rng = match config.shuffle_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            current_track: None,
            is_playing: false,
            position: Duration::ZERO,
            duration: Duration::ZERO,
            queue: Queue::new(),
            history: History::new(config.history_size),
            volume: Volume::new(config.volume),
            repeat: config.repeat,
            shuffle: config.shuffle,
            rng,
            pending_events: Vec::new(),
        }
    }

    // ===== Track Control =====

    /// Make `track` the current track and start playing it
    ///
    /// The track it replaces (if any) goes to history, evicting the oldest
    /// entry when history is full. Position resets to zero.
    pub fn set_current_track(&mut self, track: Track) {
        let previous = self.current_track.take();
        let previous_track_id = previous.as_ref().map(|t| t.id.clone());

        if let Some(previous) = previous {
            self.history.push(previous);
        }

        debug!(track_id = %track.id, previous = ?previous_track_id, "Setting current track");
        self.replace_current(track, previous_track_id);
    }

    /// Advance to the next track in the queue
    ///
    /// With shuffle on, picks a uniformly random queue entry. Otherwise plays
    /// the entry after the current track, wrapping from the last entry back
    /// to the first regardless of repeat mode. A current track that is not in
    /// the queue counts as index -1.
    ///
    /// Returns `true` if the current track was replaced; an empty queue is a
    /// no-op that leaves all state unchanged.
    pub fn play_next(&mut self) -> bool {
        let current_id = self.current_track.as_ref().map(|t| t.id.as_str());
        let Some(index) = select_next(&self.queue, current_id, self.shuffle, &mut self.rng) else {
            debug!("play_next on empty queue ignored");
            return false;
        };

        let Some(next) = self.queue.get(index).cloned() else {
            return false;
        };
        self.set_current_track(next);
        true
    }

    /// Go back to the most recent history entry
    ///
    /// The popped track becomes current and starts playing. The track it
    /// replaces is discarded, not pushed back to history or the queue.
    ///
    /// Returns `true` if the current track was replaced; an empty history is
    /// a no-op.
    pub fn play_previous(&mut self) -> bool {
        let Some(previous) = self.history.pop() else {
            debug!("play_previous with empty history ignored");
            return false;
        };

        let replaced_id = self.current_track.take().map(|t| t.id);
        debug!(track_id = %previous.id, replaced = ?replaced_id, "Returning to previous track");
        self.replace_current(previous, replaced_id);
        true
    }

    /// Push a track onto history directly
    pub fn add_to_history(&mut self, track: Track) {
        self.history.push(track);
    }

    fn replace_current(&mut self, track: Track, previous_track_id: Option<String>) {
        let track_id = track.id.clone();
        self.current_track = Some(track);
        self.position = Duration::ZERO;

        self.pending_events.push(TransportEvent::TrackChanged {
            track_id,
            previous_track_id,
        });
        self.set_playing(true);
    }

    // ===== Playback Control =====

    /// Set the playing flag
    pub fn play(&mut self) {
        self.set_playing(true);
    }

    /// Clear the playing flag
    pub fn pause(&mut self) {
        self.set_playing(false);
    }

    /// Clear the playing flag and rewind to the start
    pub fn stop(&mut self) {
        self.set_playing(false);
        self.set_current_time(Duration::ZERO);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.pending_events.push(TransportEvent::StateChanged {
                is_playing: playing,
            });
        }
    }

    // ===== Position =====

    /// Record the playback position reported by the backend
    pub fn set_current_time(&mut self, position: Duration) {
        self.position = position;
        self.pending_events.push(TransportEvent::PositionChanged {
            position_ms: position.as_millis() as u64,
        });
    }

    /// Record the track duration reported by the backend
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
        self.pending_events.push(TransportEvent::DurationChanged {
            duration_ms: duration.as_millis() as u64,
        });
    }

    // ===== Volume =====

    /// Set volume
    ///
    /// The level is stored as given (no clamping). Exactly 0 mutes, anything
    /// else unmutes.
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    /// Toggle mute state
    ///
    /// Unmuting restores the level from before the mute, or 0.8 if that
    /// level was 0.
    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    fn emit_volume_changed(&mut self) {
        self.pending_events.push(TransportEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    // ===== Shuffle & Repeat =====

    /// Set repeat mode
    ///
    /// Only read by end-of-track handling; `play_next` ignores it.
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.repeat = mode;
        self.pending_events
            .push(TransportEvent::RepeatModeChanged { mode });
    }

    /// Step repeat mode Off -> One -> All -> Off and return the new mode
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        let next = self.repeat.cycle();
        self.set_repeat_mode(next);
        next
    }

    /// Flip the shuffle flag
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;
        self.pending_events.push(TransportEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    // ===== Queue Management =====

    /// Append track to the end of the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.queue.push(track);
        self.emit_queue_changed();
    }

    /// Remove every queue entry with the given id
    pub fn remove_from_queue(&mut self, track_id: &str) {
        let removed = self.queue.remove_by_id(track_id);
        debug!(track_id = %track_id, removed, "Removed from queue");
        self.emit_queue_changed();
    }

    /// Clear entire queue
    pub fn clear_queue(&mut self) {
        self.queue.clear();
        self.emit_queue_changed();
    }

    fn emit_queue_changed(&mut self) {
        self.pending_events.push(TransportEvent::QueueChanged {
            length: self.queue.len(),
        });
    }

    // ===== State Queries =====

    /// Get currently set track
    pub fn current_track(&self) -> Option<&Track> {
        self.current_track.as_ref()
    }

    /// Whether audio should be playing
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Current playback position
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Current track duration as last reported by the backend
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Current volume level
    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    /// Output gain for the backend (clamped, 0 when muted)
    pub fn gain(&self) -> f32 {
        self.volume.gain()
    }

    /// Get current repeat mode
    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    /// Whether shuffle selection is enabled
    pub fn is_shuffled(&self) -> bool {
        self.shuffle
    }

    /// Get play queue
    pub fn queue(&self) -> &Queue {
        &self.queue
    }

    /// Get playback history
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Copy the full state for rendering
    pub fn snapshot(&self) -> TransportSnapshot {
        TransportSnapshot {
            current_track: self.current_track.clone(),
            is_playing: self.is_playing,
            position: self.position,
            duration: self.duration,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            repeat: self.repeat,
            shuffle: self.shuffle,
            queue: self.queue.as_slice().to_vec(),
            history: self.history.iter().cloned().collect(),
        }
    }

    // ===== Events =====

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new(TransportConfig::default())
    }
}
