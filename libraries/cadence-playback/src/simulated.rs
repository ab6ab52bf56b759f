//! In-process audio backend that only keeps time
//!
//! Used by the CLI demo and by tests. Nothing is decoded; position moves only
//! when [`SimulatedBackend::advance`] is called.

use crate::backend::{AudioBackend, BackendEvent, LoadToken};
use crate::error::{PlaybackError, Result};
use async_trait::async_trait;
use cadence_core::Track;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, trace};

#[derive(Debug)]
struct Loaded {
    track_id: String,
    duration: Duration,
    token: LoadToken,
}

/// Backend that reports metadata, time updates, and end-of-track through a channel
#[derive(Debug)]
pub struct SimulatedBackend {
    loaded: Option<Loaded>,
    position: Duration,
    playing: bool,
    gain: f32,
    events: mpsc::UnboundedSender<BackendEvent>,
    fail_loads: u32,
    fail_plays: u32,
}

impl SimulatedBackend {
    /// Create a backend and the receiver for its notifications
    pub fn new() -> (Self, mpsc::UnboundedReceiver<BackendEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let backend = Self {
            loaded: None,
            position: Duration::ZERO,
            playing: false,
            gain: 1.0,
            events,
            fail_loads: 0,
            fail_plays: 0,
        };
        (backend, rx)
    }

    /// Make the next `count` calls to `set_track` fail
    pub fn fail_next_loads(&mut self, count: u32) {
        self.fail_loads = count;
    }

    /// Make the next `count` calls to `play` fail
    pub fn fail_next_plays(&mut self, count: u32) {
        self.fail_plays = count;
    }

    /// Move the playhead forward by `elapsed` if playing
    ///
    /// Emits a time update, followed by an end notification once the
    /// playhead reaches the track duration.
    pub fn advance(&mut self, elapsed: Duration) {
        if !self.playing {
            return;
        }
        let Some(loaded) = &self.loaded else {
            return;
        };

        self.position = (self.position + elapsed).min(loaded.duration);
        let token = loaded.token;
        let finished = self.position >= loaded.duration;
        trace!(position_ms = self.position.as_millis() as u64, "Simulated time update");

        self.emit(BackendEvent::TimeUpdate {
            token,
            position: self.position,
        });

        if finished {
            self.playing = false;
            self.emit(BackendEvent::Ended { token });
        }
    }

    /// Id of the loaded track
    pub fn loaded_track_id(&self) -> Option<&str> {
        self.loaded.as_ref().map(|l| l.track_id.as_str())
    }

    /// Token of the current load
    pub fn current_token(&self) -> Option<LoadToken> {
        self.loaded.as_ref().map(|l| l.token)
    }

    /// Whether output is running
    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// Playhead position
    pub fn position(&self) -> Duration {
        self.position
    }

    /// Last gain applied
    pub fn volume(&self) -> f32 {
        self.gain
    }

    fn emit(&self, event: BackendEvent) {
        // Receiver may be gone when nobody listens; that is fine
        let _ = self.events.send(event);
    }
}

#[async_trait]
impl AudioBackend for SimulatedBackend {
    async fn set_track(&mut self, track: &Track, token: LoadToken) -> Result<()> {
        self.playing = false;
        self.position = Duration::ZERO;

        if self.fail_loads > 0 {
            self.fail_loads -= 1;
            self.loaded = None;
            return Err(PlaybackError::Load {
                track_id: track.id.clone(),
                reason: "simulated load failure".to_string(),
            });
        }

        debug!(track_id = %track.id, token = token.0, "Simulated backend loaded track");
        self.loaded = Some(Loaded {
            track_id: track.id.clone(),
            duration: track.duration,
            token,
        });
        self.emit(BackendEvent::MetadataLoaded {
            token,
            duration: track.duration,
        });
        Ok(())
    }

    async fn play(&mut self) -> Result<()> {
        if self.fail_plays > 0 {
            self.fail_plays -= 1;
            return Err(PlaybackError::Playback(
                "simulated output failure".to_string(),
            ));
        }
        if self.loaded.is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) {
        let limit = self.loaded.as_ref().map_or(Duration::ZERO, |l| l.duration);
        self.position = position.min(limit);
    }

    fn set_volume(&mut self, gain: f32) {
        self.gain = gain.clamp(0.0, 1.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(secs: u64) -> Track {
        Track::new("t", "Title", "Artist", "Album", Duration::from_secs(secs))
    }

    #[tokio::test]
    async fn load_reports_metadata() {
        let (mut backend, mut rx) = SimulatedBackend::new();
        backend.set_track(&track(90), LoadToken(1)).await.unwrap();

        assert_eq!(
            rx.try_recv().unwrap(),
            BackendEvent::MetadataLoaded {
                token: LoadToken(1),
                duration: Duration::from_secs(90)
            }
        );
        assert_eq!(backend.loaded_track_id(), Some("t"));
    }

    #[tokio::test]
    async fn advance_to_end_emits_ended() {
        let (mut backend, mut rx) = SimulatedBackend::new();
        backend.set_track(&track(10), LoadToken(1)).await.unwrap();
        backend.play().await.unwrap();
        let _ = rx.try_recv();

        backend.advance(Duration::from_secs(15));

        assert_eq!(
            rx.try_recv().unwrap(),
            BackendEvent::TimeUpdate {
                token: LoadToken(1),
                position: Duration::from_secs(10)
            }
        );
        assert_eq!(
            rx.try_recv().unwrap(),
            BackendEvent::Ended {
                token: LoadToken(1)
            }
        );
        assert!(!backend.is_playing());
    }

    #[tokio::test]
    async fn paused_backend_does_not_advance() {
        let (mut backend, mut rx) = SimulatedBackend::new();
        backend.set_track(&track(10), LoadToken(1)).await.unwrap();
        let _ = rx.try_recv();

        backend.advance(Duration::from_secs(5));
        assert!(rx.try_recv().is_err());
        assert_eq!(backend.position(), Duration::ZERO);
    }

    #[tokio::test]
    async fn injected_failures() {
        let (mut backend, _rx) = SimulatedBackend::new();
        backend.fail_next_loads(1);
        assert!(matches!(
            backend.set_track(&track(10), LoadToken(1)).await,
            Err(PlaybackError::Load { .. })
        ));
        assert!(matches!(
            backend.play().await,
            Err(PlaybackError::NoTrackLoaded)
        ));

        backend.set_track(&track(10), LoadToken(2)).await.unwrap();
        backend.fail_next_plays(1);
        assert!(backend.play().await.is_err());
        assert!(backend.play().await.is_ok());
    }

    #[test]
    fn volume_is_clamped() {
        let (mut backend, _rx) = SimulatedBackend::new();
        backend.set_volume(1.7);
        assert_eq!(backend.volume(), 1.0);
        backend.set_volume(-1.0);
        assert_eq!(backend.volume(), 0.0);
    }
}
