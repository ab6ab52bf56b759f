//! Catalog and playback domain types

mod album;
mod artist;
mod playback;
mod playlist;
mod search;
mod source;
mod track;

pub use album::Album;
pub use artist::Artist;
pub use playback::RepeatMode;
pub use playlist::{Playlist, PlaylistUpdate};
pub use search::SearchResults;
pub use source::SourceInfo;
pub use track::Track;
