//! Library store
//!
//! Holds the catalog plus the user's likes, recently played list, search
//! state, and playlists.

use crate::search::search_catalog;
use cadence_core::{
    Album, Artist, CadenceError, Playlist, PlaylistUpdate, Result, SearchResults, Track,
};
use cadence_sources::Catalog;
use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

/// Maximum number of recently played tracks
pub const RECENTLY_PLAYED_LIMIT: usize = 50;

/// Owner recorded on playlists created by the user
pub const USER_OWNER: &str = "user";

const DEFAULT_PLAYLIST_COVER: &str =
    "https://images.pexels.com/photos/1763075/pexels-photo-1763075.jpeg";

/// In-memory library
///
/// Catalog tracks are never edited in place: liking a track stores a copy
/// with the liked flag set.
#[derive(Debug, Clone, Default)]
pub struct LibraryStore {
    tracks: Vec<Track>,
    albums: Vec<Album>,
    artists: Vec<Artist>,
    playlists: Vec<Playlist>,

    liked_tracks: Vec<Track>,
    recently_played: Vec<Track>,

    search_query: String,
    search_results: SearchResults,
}

impl LibraryStore {
    /// Create an empty library
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library holding a copy of `catalog`
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            tracks: catalog.tracks.clone(),
            albums: catalog.albums.clone(),
            artists: catalog.artists.clone(),
            playlists: catalog.playlists.clone(),
            ..Self::default()
        }
    }

    /// Merge source results into the catalog
    ///
    /// Entries whose id is already present are skipped. Returns the number of
    /// entries added.
    pub fn ingest(&mut self, results: SearchResults) -> usize {
        let added = merge_by_id(&mut self.tracks, results.tracks, |t| &t.id)
            + merge_by_id(&mut self.albums, results.albums, |a| &a.id)
            + merge_by_id(&mut self.artists, results.artists, |a| &a.id)
            + merge_by_id(&mut self.playlists, results.playlists, |p| &p.id);
        debug!(added, "Ingested source results");
        added
    }

    // ===== Catalog =====

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn albums(&self) -> &[Album] {
        &self.albums
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn playlists(&self) -> &[Playlist] {
        &self.playlists
    }

    /// Look up a catalog track by id
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Look up a playlist by id
    pub fn playlist(&self, id: &str) -> Option<&Playlist> {
        self.playlists.iter().find(|p| p.id == id)
    }

    // ===== Search =====

    /// Set the query without searching
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    /// Search the catalog and keep both the query and its results
    ///
    /// A blank query produces empty results.
    pub fn search_library(&mut self, query: &str) -> &SearchResults {
        self.search_results = search_catalog(
            query,
            &self.tracks,
            &self.albums,
            &self.artists,
            &self.playlists,
        );
        self.search_query = query.to_string();
        debug!(query = %query, results = self.search_results.total(), "Library search");
        &self.search_results
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn search_results(&self) -> &SearchResults {
        &self.search_results
    }

    // ===== Likes =====

    /// Like or unlike a catalog track
    ///
    /// Returns the new liked state. Unknown ids are ignored and return `false`.
    pub fn toggle_like_track(&mut self, track_id: &str) -> bool {
        if self.is_liked(track_id) {
            self.liked_tracks.retain(|t| t.id != track_id);
            debug!(track_id = %track_id, "Track unliked");
            return false;
        }

        let Some(track) = self.track(track_id) else {
            debug!(track_id = %track_id, "Like ignored for unknown track");
            return false;
        };

        let liked = track.with_liked(true);
        self.liked_tracks.push(liked);
        debug!(track_id = %track_id, "Track liked");
        true
    }

    pub fn is_liked(&self, track_id: &str) -> bool {
        self.liked_tracks.iter().any(|t| t.id == track_id)
    }

    /// Liked tracks in the order they were liked
    pub fn liked_tracks(&self) -> &[Track] {
        &self.liked_tracks
    }

    // ===== Recently Played =====

    /// Record a play, most recent first
    ///
    /// An earlier entry for the same track is removed; the list keeps at most
    /// [`RECENTLY_PLAYED_LIMIT`] tracks.
    pub fn add_to_recently_played(&mut self, track: Track) {
        self.recently_played.retain(|t| t.id != track.id);
        self.recently_played.insert(0, track);
        self.recently_played.truncate(RECENTLY_PLAYED_LIMIT);
    }

    pub fn recently_played(&self) -> &[Track] {
        &self.recently_played
    }

    // ===== Playlists =====

    /// Create an empty private playlist owned by the user
    pub fn create_playlist(
        &mut self,
        name: impl Into<String>,
        description: Option<String>,
    ) -> Playlist {
        let now = Utc::now();
        let playlist = Playlist {
            id: format!("playlist-{}", Uuid::new_v4()),
            name: name.into(),
            description,
            cover_url: DEFAULT_PLAYLIST_COVER.to_string(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
            is_public: false,
            owner: Some(USER_OWNER.to_string()),
        };

        info!(playlist_id = %playlist.id, name = %playlist.name, "Playlist created");
        self.playlists.push(playlist.clone());
        playlist
    }

    /// Append a track to a playlist
    pub fn add_track_to_playlist(&mut self, playlist_id: &str, track: Track) -> Result<()> {
        let playlist = self.playlist_mut(playlist_id)?;
        playlist.tracks.push(track);
        playlist.updated_at = Utc::now();
        Ok(())
    }

    /// Remove every occurrence of a track from a playlist
    pub fn remove_track_from_playlist(&mut self, playlist_id: &str, track_id: &str) -> Result<()> {
        let playlist = self.playlist_mut(playlist_id)?;
        playlist.tracks.retain(|t| t.id != track_id);
        playlist.updated_at = Utc::now();
        Ok(())
    }

    /// Apply a partial edit to a playlist
    pub fn update_playlist(&mut self, playlist_id: &str, update: PlaylistUpdate) -> Result<()> {
        let playlist = self.playlist_mut(playlist_id)?;
        playlist.apply(update);
        playlist.updated_at = Utc::now();
        Ok(())
    }

    /// Delete a playlist
    pub fn delete_playlist(&mut self, playlist_id: &str) -> Result<()> {
        let before = self.playlists.len();
        self.playlists.retain(|p| p.id != playlist_id);
        if self.playlists.len() == before {
            return Err(CadenceError::not_found("Playlist", playlist_id));
        }
        info!(playlist_id = %playlist_id, "Playlist deleted");
        Ok(())
    }

    fn playlist_mut(&mut self, playlist_id: &str) -> Result<&mut Playlist> {
        self.playlists
            .iter_mut()
            .find(|p| p.id == playlist_id)
            .ok_or_else(|| CadenceError::not_found("Playlist", playlist_id))
    }
}

fn merge_by_id<T>(existing: &mut Vec<T>, incoming: Vec<T>, id: impl Fn(&T) -> &String) -> usize {
    let mut added = 0;
    for item in incoming {
        if !existing.iter().any(|e| id(e) == id(&item)) {
            existing.push(item);
            added += 1;
        }
    }
    added
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn track(id: &str) -> Track {
        Track::new(id, format!("Song {}", id), "Artist", "Album", Duration::from_secs(100))
    }

    fn store_with(ids: &[&str]) -> LibraryStore {
        let mut store = LibraryStore::new();
        store.ingest(SearchResults {
            tracks: ids.iter().map(|id| track(id)).collect(),
            ..Default::default()
        });
        store
    }

    #[test]
    fn like_copies_track() {
        let mut store = store_with(&["a"]);

        assert!(store.toggle_like_track("a"));
        assert!(store.is_liked("a"));
        assert!(store.liked_tracks()[0].liked);
        assert!(!store.track("a").unwrap().liked);

        assert!(!store.toggle_like_track("a"));
        assert!(!store.is_liked("a"));
        assert!(store.liked_tracks().is_empty());
    }

    #[test]
    fn like_unknown_track_is_ignored() {
        let mut store = store_with(&["a"]);
        assert!(!store.toggle_like_track("zzz"));
        assert!(store.liked_tracks().is_empty());
    }

    #[test]
    fn recently_played_dedups_and_orders() {
        let mut store = LibraryStore::new();
        store.add_to_recently_played(track("a"));
        store.add_to_recently_played(track("b"));
        store.add_to_recently_played(track("a"));

        let ids: Vec<_> = store.recently_played().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn ingest_skips_known_ids() {
        let mut store = store_with(&["a", "b"]);
        let added = store.ingest(SearchResults {
            tracks: vec![track("b"), track("c")],
            ..Default::default()
        });
        assert_eq!(added, 1);
        assert_eq!(store.tracks().len(), 3);
    }

    #[test]
    fn set_search_query_does_not_search() {
        let mut store = store_with(&["a"]);
        store.set_search_query("song");
        assert_eq!(store.search_query(), "song");
        assert!(store.search_results().is_empty());
    }
}
