//! Cadence - Music Sources
//!
//! Simulated catalog providers and the registry that holds them.
//!
//! Four providers (Spotify, YouTube Music, SoundCloud, local files) share
//! one demo [`Catalog`] and differ only in their [`SourceProfile`]: how long
//! each call takes, which slice of the catalog it returns, and how search
//! matches and truncates.
//!
//! # Example
//!
//! ```rust
//! use cadence_core::MusicSource;
//! use cadence_sources::{Catalog, Latency, SourceRegistry};
//! use std::sync::Arc;
//!
//! # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
//! let registry = SourceRegistry::with_builtin(Arc::new(Catalog::demo()), Latency::none());
//!
//! let local = registry.active().unwrap();
//! let results = local.search("blue").await.unwrap();
//! assert!(!results.tracks.is_empty());
//! # });
//! ```

pub mod catalog;
pub mod mock;
pub mod profile;
pub mod registry;

pub use catalog::Catalog;
pub use mock::{Latency, MockSource};
pub use profile::{Listing, SearchLimits, SearchProfile, SourceProfile};
pub use registry::{SourceRegistry, DEFAULT_ACTIVE_SOURCE};
