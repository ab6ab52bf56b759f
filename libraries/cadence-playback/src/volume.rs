//! Volume control with mute/restore
//!
//! The transport stores the level exactly as given; clamping to [0, 1] is the
//! caller's job and happens again at the audio backend via [`Volume::gain`].

use crate::types::DEFAULT_VOLUME;

/// Volume controller
///
/// Muting forces the level to 0 and remembers the level it replaced.
/// Unmuting restores that level, or [`DEFAULT_VOLUME`] when it was 0, so
/// muting and unmuting a silent player lands on 0.8 rather than 0.
#[derive(Debug, Clone)]
pub struct Volume {
    /// Volume level (nominally 0.0-1.0, not clamped)
    level: f32,

    /// Mute state
    muted: bool,

    /// Level to restore on unmute
    restore_level: f32,
}

impl Volume {
    /// Create new volume controller
    pub fn new(level: f32) -> Self {
        Self {
            level,
            muted: level == 0.0,
            restore_level: level,
        }
    }

    /// Set volume level
    ///
    /// A level of exactly 0 mutes; any other level unmutes.
    pub fn set_level(&mut self, level: f32) {
        self.level = level;
        self.muted = level == 0.0;
        self.restore_level = level;
    }

    /// Get current volume level
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        if self.muted {
            self.level = if self.restore_level == 0.0 {
                DEFAULT_VOLUME
            } else {
                self.restore_level
            };
            self.muted = false;
        } else {
            self.restore_level = self.level;
            self.level = 0.0;
            self.muted = true;
        }
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Output gain for an audio backend, clamped to [0, 1]
    ///
    /// Returns 0.0 if muted.
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level.clamp(0.0, 1.0)
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(DEFAULT_VOLUME)
    }
}
