//! Cadence Core
//!
//! Platform-agnostic catalog types, traits, and error handling for Cadence.
//!
//! This crate provides the building blocks shared by the playback transport,
//! the library store, and the music source adapters.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Album`, `Artist`, `Playlist`, `SearchResults`
//! - **Core Traits**: `MusicSource` (catalog provider contract)
//! - **Error Handling**: Unified `CadenceError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use cadence_core::types::{RepeatMode, Track};
//! use std::time::Duration;
//!
//! let track = Track::new("t1", "Blue Hour", "Nadia Rowe", "Low Tide", Duration::from_secs(214));
//! let liked = track.with_liked(true);
//!
//! assert!(!track.liked);
//! assert!(liked.liked);
//! assert_eq!(RepeatMode::Off.cycle(), RepeatMode::One);
//! ```

#![forbid(unsafe_code)]

pub mod error;
pub mod text;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::{CadenceError, Result};
pub use traits::MusicSource;

pub use types::{
    Album, Artist, Playlist, PlaylistUpdate, RepeatMode, SearchResults, SourceInfo, Track,
};
