//! Audio backend contract
//!
//! Implemented by whatever actually produces sound. The controller drives the
//! backend with commands and receives [`BackendEvent`]s back.

use crate::error::Result;
use async_trait::async_trait;
use cadence_core::Track;
use std::time::Duration;

/// Identifies one `set_track` call
///
/// The controller hands out a fresh token for every load. Backends tag their
/// notifications with the token of the load they belong to, so events from a
/// superseded track can be recognized and dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LoadToken(pub u64);

/// Notification from the audio backend
#[derive(Debug, Clone, PartialEq)]
pub enum BackendEvent {
    /// Playback position advanced
    TimeUpdate { token: LoadToken, position: Duration },

    /// Track metadata became available
    MetadataLoaded { token: LoadToken, duration: Duration },

    /// Track played to the end
    Ended { token: LoadToken },
}

impl BackendEvent {
    /// Load this notification belongs to
    pub fn token(&self) -> LoadToken {
        match self {
            Self::TimeUpdate { token, .. }
            | Self::MetadataLoaded { token, .. }
            | Self::Ended { token } => *token,
        }
    }
}

/// Audio output driven by the [`PlaybackController`](crate::PlaybackController)
#[async_trait]
pub trait AudioBackend: Send {
    /// Load `track`, replacing whatever was loaded before
    ///
    /// Notifications for this track must carry `token`.
    async fn set_track(&mut self, track: &Track, token: LoadToken) -> Result<()>;

    /// Start or resume output
    async fn play(&mut self) -> Result<()>;

    /// Pause output
    fn pause(&mut self);

    /// Seek within the loaded track
    fn seek(&mut self, position: Duration);

    /// Set output gain (0.0-1.0)
    fn set_volume(&mut self, gain: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_expose_their_token() {
        let token = LoadToken(3);
        assert_eq!(
            BackendEvent::TimeUpdate {
                token,
                position: Duration::from_secs(1)
            }
            .token(),
            token
        );
        assert_eq!(BackendEvent::Ended { token }.token(), token);
    }
}
