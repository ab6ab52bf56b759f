/// Core traits for Cadence
use crate::error::Result;
use crate::types::{Album, Playlist, SearchResults, SourceInfo, Track};
use async_trait::async_trait;

/// Music source trait
///
/// Implementers provide catalog slices from an external music service.
/// Every catalog operation is asynchronous and independently fallible;
/// the playback transport never calls these directly, it only receives
/// `Track` values that were already resolved through a source.
///
/// Authentication state lives behind `&self` so a registry can share
/// sources across concurrent requests.
#[async_trait]
pub trait MusicSource: Send + Sync {
    /// Identity and presentation details
    fn info(&self) -> &SourceInfo;

    /// Stable identifier (shorthand for `info().id`)
    fn id(&self) -> &str {
        &self.info().id
    }

    /// Whether `authenticate` has succeeded
    fn is_authenticated(&self) -> bool;

    /// Authenticate against the service
    ///
    /// On failure the source stays unauthenticated and the call may be retried.
    async fn authenticate(&self) -> Result<()>;

    /// Search tracks, albums, artists, and playlists by case-insensitive substring
    ///
    /// An empty or whitespace-only query yields empty results.
    async fn search(&self, query: &str) -> Result<SearchResults>;

    /// List playlists offered by the source
    async fn get_playlists(&self) -> Result<Vec<Playlist>>;

    /// List albums offered by the source
    async fn get_albums(&self) -> Result<Vec<Album>>;

    /// List the source's top tracks
    async fn get_top_tracks(&self) -> Result<Vec<Track>>;

    /// List recommended tracks
    async fn get_recommendations(&self) -> Result<Vec<Track>>;
}
