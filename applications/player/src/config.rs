/// Player configuration
use crate::error::{AppError, Result};
use cadence_core::RepeatMode;
use cadence_playback::{TransportConfig, DEFAULT_HISTORY_SIZE, DEFAULT_VOLUME};
use cadence_sources::{Latency, SourceProfile, DEFAULT_ACTIVE_SOURCE};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Config file picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "cadence.toml";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default = "default_sources")]
    pub sources: SourceSettings,

    #[serde(default = "default_interface")]
    pub interface: InterfaceSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default = "default_volume")]
    pub volume: f32,

    #[serde(default = "default_history_size")]
    pub history_size: usize,

    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default)]
    pub shuffle: bool,

    #[serde(default = "default_auto_play_next")]
    pub auto_play_next: bool,

    #[serde(default)]
    pub shuffle_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SourceSettings {
    #[serde(default = "default_active_source")]
    pub active_source: String,

    #[serde(default = "default_simulate_latency")]
    pub simulate_latency: bool,

    #[serde(default = "default_latency_scale")]
    pub latency_scale: f64,
}

/// Presentation preferences
///
/// `show_notifications` gates the CLI's "now playing" lines; the other
/// fields are carried for a UI layer and not read by the CLI.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct InterfaceSettings {
    #[serde(default = "default_theme")]
    pub theme: String,

    #[serde(default = "default_language")]
    pub language: String,

    #[serde(default)]
    pub mode: InterfaceMode,

    #[serde(default = "default_show_notifications")]
    pub show_notifications: bool,

    #[serde(default)]
    pub playback_quality: PlaybackQuality,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterfaceMode {
    Simple,
    #[default]
    Advanced,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackQuality {
    Low,
    Medium,
    #[default]
    High,
}

impl PlayerConfig {
    /// Load configuration from defaults, a TOML file, and the environment
    ///
    /// An explicit `path` must exist. Without one, `cadence.toml` in the
    /// working directory is used if present. Environment variables prefixed
    /// `CADENCE_` override both, with `__` between section and key
    /// (`CADENCE_PLAYBACK__VOLUME=0.5`).
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("CADENCE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings.build()?;
        Ok(config.try_deserialize()?)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let volume = self.playback.volume;
        if !(0.0..=1.0).contains(&volume) {
            return Err(AppError::Config(format!(
                "playback.volume must be between 0.0 and 1.0, got {}",
                volume
            )));
        }

        if self.playback.history_size == 0 {
            return Err(AppError::Config(
                "playback.history_size must be at least 1".to_string(),
            ));
        }

        if !self.sources.latency_scale.is_finite() || self.sources.latency_scale < 0.0 {
            return Err(AppError::Config(format!(
                "sources.latency_scale must be a non-negative number, got {}",
                self.sources.latency_scale
            )));
        }

        let known = SourceProfile::builtin()
            .iter()
            .any(|p| p.info.id == self.sources.active_source);
        if !known {
            return Err(AppError::UnknownSource(self.sources.active_source.clone()));
        }

        Ok(())
    }

    /// Transport settings derived from the playback section
    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            history_size: self.playback.history_size,
            volume: self.playback.volume,
            repeat: self.playback.repeat,
            shuffle: self.playback.shuffle,
            shuffle_seed: self.playback.shuffle_seed,
        }
    }

    /// Latency applied by the simulated sources
    pub fn latency(&self) -> Latency {
        if self.sources.simulate_latency {
            Latency::simulated(self.sources.latency_scale)
        } else {
            Latency::none()
        }
    }
}

// Default values
fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        volume: default_volume(),
        history_size: default_history_size(),
        repeat: RepeatMode::Off,
        shuffle: false,
        auto_play_next: default_auto_play_next(),
        shuffle_seed: None,
    }
}

fn default_volume() -> f32 {
    DEFAULT_VOLUME
}

fn default_history_size() -> usize {
    DEFAULT_HISTORY_SIZE
}

fn default_auto_play_next() -> bool {
    true
}

fn default_sources() -> SourceSettings {
    SourceSettings {
        active_source: default_active_source(),
        simulate_latency: default_simulate_latency(),
        latency_scale: default_latency_scale(),
    }
}

fn default_active_source() -> String {
    DEFAULT_ACTIVE_SOURCE.to_string()
}

fn default_simulate_latency() -> bool {
    true
}

fn default_latency_scale() -> f64 {
    1.0
}

fn default_interface() -> InterfaceSettings {
    InterfaceSettings {
        theme: default_theme(),
        language: default_language(),
        mode: InterfaceMode::default(),
        show_notifications: default_show_notifications(),
        playback_quality: PlaybackQuality::default(),
    }
}

fn default_theme() -> String {
    "dark".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_show_notifications() -> bool {
    true
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playback: default_playback(),
            sources: default_sources(),
            interface: default_interface(),
        }
    }
}
