//! Playback controller
//!
//! Binds a [`Transport`] to an [`AudioBackend`]: loads the backend whenever
//! the current track changes, mirrors play/pause/volume, and applies backend
//! notifications back onto the transport.

use crate::{
    backend::{AudioBackend, BackendEvent, LoadToken},
    events::TransportEvent,
    transport::Transport,
};
use cadence_core::{RepeatMode, Track};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Drives an audio backend from transport state
///
/// Backend failures never propagate: they are logged and the transport keeps
/// whatever state the triggering operation gave it.
pub struct PlaybackController<B: AudioBackend> {
    transport: Transport,
    backend: B,

    /// Incremented on every load; the latest value identifies live notifications
    load_generation: u64,
    active_load: Option<LoadToken>,

    /// Advance to the next queue entry when a track ends
    auto_play_next: bool,
}

impl<B: AudioBackend> PlaybackController<B> {
    /// Create a controller and push the transport's volume to the backend
    pub fn new(transport: Transport, mut backend: B) -> Self {
        backend.set_volume(transport.gain());
        Self {
            transport,
            backend,
            load_generation: 0,
            active_load: None,
            auto_play_next: true,
        }
    }

    /// Enable or disable advancing when a track ends (default: enabled)
    #[must_use]
    pub fn with_auto_play_next(mut self, enabled: bool) -> Self {
        self.auto_play_next = enabled;
        self
    }

    // ===== Track Control =====

    /// Make `track` current and load it into the backend
    pub async fn set_current_track(&mut self, track: Track) {
        self.transport.set_current_track(track);
        self.load_current().await;
    }

    /// Advance to the next queue entry
    pub async fn play_next(&mut self) -> bool {
        let changed = self.transport.play_next();
        if changed {
            self.load_current().await;
        }
        changed
    }

    /// Return to the most recent history entry
    pub async fn play_previous(&mut self) -> bool {
        let changed = self.transport.play_previous();
        if changed {
            self.load_current().await;
        }
        changed
    }

    async fn load_current(&mut self) {
        let Some(track) = self.transport.current_track().cloned() else {
            return;
        };

        self.load_generation += 1;
        let token = LoadToken(self.load_generation);
        self.active_load = Some(token);

        if let Err(e) = self.backend.set_track(&track, token).await {
            warn!(track_id = %track.id, error = %e, "Failed to load track");
            return;
        }
        debug!(track_id = %track.id, token = token.0, "Track loaded");

        if self.transport.is_playing() {
            self.start_backend().await;
        }
    }

    async fn start_backend(&mut self) {
        if let Err(e) = self.backend.play().await {
            warn!(error = %e, "Failed to start playback");
        }
    }

    // ===== Playback Control =====

    /// Start or resume playback
    ///
    /// Without a current track only the playing flag changes.
    pub async fn play(&mut self) {
        self.transport.play();
        if self.transport.current_track().is_some() {
            self.start_backend().await;
        }
    }

    /// Pause playback
    pub fn pause(&mut self) {
        self.transport.pause();
        if self.transport.current_track().is_some() {
            self.backend.pause();
        }
    }

    /// Toggle between play and pause
    pub async fn toggle_play_pause(&mut self) {
        if self.transport.is_playing() {
            self.pause();
        } else {
            self.play().await;
        }
    }

    /// Pause and rewind to the start of the current track
    pub fn stop(&mut self) {
        self.transport.stop();
        if self.transport.current_track().is_some() {
            self.backend.pause();
            self.backend.seek(Duration::ZERO);
        }
    }

    /// Seek within the current track
    pub fn seek(&mut self, position: Duration) {
        if self.transport.current_track().is_none() {
            return;
        }
        self.backend.seek(position);
        self.transport.set_current_time(position);
    }

    // ===== Volume =====

    /// Set volume level
    pub fn set_volume(&mut self, level: f32) {
        self.transport.set_volume(level);
        self.backend.set_volume(self.transport.gain());
    }

    /// Toggle mute
    pub fn toggle_mute(&mut self) {
        self.transport.toggle_mute();
        self.backend.set_volume(self.transport.gain());
    }

    // ===== Queue & Modes =====

    /// Append track to the queue
    pub fn add_to_queue(&mut self, track: Track) {
        self.transport.add_to_queue(track);
    }

    /// Remove every queue entry with the given id
    pub fn remove_from_queue(&mut self, track_id: &str) {
        self.transport.remove_from_queue(track_id);
    }

    /// Clear the queue
    pub fn clear_queue(&mut self) {
        self.transport.clear_queue();
    }

    /// Set repeat mode
    pub fn set_repeat_mode(&mut self, mode: RepeatMode) {
        self.transport.set_repeat_mode(mode);
    }

    /// Step to the next repeat mode
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.transport.cycle_repeat_mode()
    }

    /// Flip shuffle
    pub fn toggle_shuffle(&mut self) {
        self.transport.toggle_shuffle();
    }

    // ===== Backend Notifications =====

    /// Apply a backend notification
    ///
    /// Returns `false` when the notification belongs to a superseded load
    /// and was dropped.
    pub async fn handle_event(&mut self, event: BackendEvent) -> bool {
        if self.active_load != Some(event.token()) {
            debug!(token = event.token().0, "Dropping stale backend event");
            return false;
        }

        match event {
            BackendEvent::TimeUpdate { position, .. } => {
                self.transport.set_current_time(position);
            }
            BackendEvent::MetadataLoaded { duration, .. } => {
                self.transport.set_duration(duration);
            }
            BackendEvent::Ended { .. } => {
                self.on_track_ended().await;
            }
        }
        true
    }

    async fn on_track_ended(&mut self) {
        let finished = self.transport.current_track().map(|t| t.id.clone());

        if self.transport.repeat_mode() == RepeatMode::One {
            debug!(track_id = ?finished, "Repeating track");
            self.backend.seek(Duration::ZERO);
            self.transport.set_current_time(Duration::ZERO);
            self.start_backend().await;
            return;
        }

        if self.auto_play_next && self.play_next().await {
            info!(
                finished = ?finished,
                next = ?self.transport.current_track().map(|t| t.id.as_str()),
                "Advanced to next track"
            );
            return;
        }

        // Nothing to advance to
        self.transport.pause();
    }

    // ===== Accessors =====

    /// Transport state
    pub fn transport(&self) -> &Transport {
        &self.transport
    }

    /// Audio backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable audio backend, e.g. to drive a simulated clock
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    /// Take pending transport events
    pub fn drain_events(&mut self) -> Vec<TransportEvent> {
        self.transport.drain_events()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimulatedBackend;

    fn track(id: &str, secs: u64) -> Track {
        Track::new(id, id.to_uppercase(), "Artist", "Album", Duration::from_secs(secs))
    }

    #[tokio::test]
    async fn controller_pushes_initial_gain() {
        let (backend, _rx) = SimulatedBackend::new();
        let controller = PlaybackController::new(Transport::default(), backend);
        assert_eq!(controller.backend().volume(), 0.8);
    }

    #[tokio::test]
    async fn set_current_track_loads_and_plays() {
        let (backend, _rx) = SimulatedBackend::new();
        let mut controller = PlaybackController::new(Transport::default(), backend);

        controller.set_current_track(track("a", 60)).await;

        assert_eq!(controller.backend().loaded_track_id(), Some("a"));
        assert!(controller.backend().is_playing());
    }

    #[tokio::test]
    async fn play_without_track_skips_backend() {
        let (backend, _rx) = SimulatedBackend::new();
        let mut controller = PlaybackController::new(Transport::default(), backend);

        controller.play().await;

        assert!(controller.transport().is_playing());
        assert!(!controller.backend().is_playing());
    }

    #[tokio::test]
    async fn mute_silences_backend() {
        let (backend, _rx) = SimulatedBackend::new();
        let mut controller = PlaybackController::new(Transport::default(), backend);

        controller.toggle_mute();
        assert_eq!(controller.backend().volume(), 0.0);

        controller.toggle_mute();
        assert_eq!(controller.backend().volume(), 0.8);
    }
}
