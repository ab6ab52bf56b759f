//! Cadence - Playback Transport
//!
//! Platform-agnostic playback state for Cadence.
//!
//! This crate provides:
//! - Transport state (current track, play/pause, position, duration)
//! - Volume control (0.0-1.0, mute/unmute with restore)
//! - Play queue (insertion order, duplicates allowed)
//! - Playback history (bounded, 20 tracks by default)
//! - Shuffle selection and repeat modes (Off, One, All)
//! - Events for UI synchronization
//! - An audio backend contract plus the controller that wires it to the transport
//!
//! # Architecture
//!
//! `cadence-playback` never decodes audio:
//! - [`Transport`] is a synchronous state machine. Every operation is total;
//!   empty queues and histories turn operations into no-ops.
//! - [`AudioBackend`] is implemented by the platform (or [`SimulatedBackend`]).
//! - [`PlaybackController`] owns both, loads the backend whenever the current
//!   track changes, and applies backend notifications, dropping the ones that
//!   belong to a superseded load.
//!
//! # Example: Transport
//!
//! ```rust
//! use cadence_core::Track;
//! use cadence_playback::{Transport, TransportConfig};
//! use std::time::Duration;
//!
//! let mut transport = Transport::new(TransportConfig::default());
//!
//! let a = Track::new("a", "Intro", "Orla", "Prism", Duration::from_secs(90));
//! let b = Track::new("b", "Glass", "Orla", "Prism", Duration::from_secs(200));
//! transport.add_to_queue(a.clone());
//! transport.add_to_queue(b);
//!
//! transport.set_current_track(a);
//! transport.play_next();
//! assert_eq!(transport.current_track().map(|t| t.id.as_str()), Some("b"));
//!
//! transport.play_previous();
//! assert_eq!(transport.current_track().map(|t| t.id.as_str()), Some("a"));
//! ```
//!
//! # Example: Controller with the simulated backend
//!
//! ```rust
//! use cadence_core::Track;
//! use cadence_playback::{PlaybackController, SimulatedBackend, Transport, TransportConfig};
//! use std::time::Duration;
//!
//! # tokio_test_block(async {
//! let (backend, mut notifications) = SimulatedBackend::new();
//! let mut controller = PlaybackController::new(Transport::new(TransportConfig::default()), backend);
//!
//! let track = Track::new("a", "Intro", "Orla", "Prism", Duration::from_secs(90));
//! controller.set_current_track(track).await;
//!
//! while let Ok(event) = notifications.try_recv() {
//!     controller.handle_event(event).await;
//! }
//! assert_eq!(controller.transport().duration(), Duration::from_secs(90));
//! # });
//! # fn tokio_test_block<F: std::future::Future>(f: F) {
//! #     tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(f);
//! # }
//! ```

mod backend;
mod controller;
mod error;
mod events;
mod history;
mod queue;
mod shuffle;
mod simulated;
mod transport;
pub mod types;
mod volume;

// Public exports
pub use backend::{AudioBackend, BackendEvent, LoadToken};
pub use controller::PlaybackController;
pub use error::{PlaybackError, Result};
pub use events::TransportEvent;
pub use history::History;
pub use queue::Queue;
pub use simulated::SimulatedBackend;
pub use transport::Transport;
pub use types::{TransportConfig, TransportSnapshot, DEFAULT_HISTORY_SIZE, DEFAULT_VOLUME};
pub use volume::Volume;

pub use cadence_core::RepeatMode;
