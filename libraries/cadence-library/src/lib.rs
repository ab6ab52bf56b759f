//! Cadence - Library
//!
//! The user's view of the catalog: search, liked tracks, recently played,
//! and playlist editing. Everything is in memory; nothing is persisted.

mod search;
pub mod store;

pub use store::{LibraryStore, RECENTLY_PLAYED_LIMIT, USER_OWNER};
