//! Simulated music source
//!
//! Serves slices of the shared demo catalog after a provider-specific delay.

use crate::catalog::Catalog;
use crate::profile::{SearchLimits, SourceProfile};
use async_trait::async_trait;
use cadence_core::text::{contains_normalized, normalize_query, option_contains_normalized};
use cadence_core::{
    Album, CadenceError, MusicSource, Playlist, Result, SearchResults, SourceInfo, Track,
};
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// How simulated network delays are applied
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Latency {
    enabled: bool,
    scale: f64,
}

impl Latency {
    /// Apply profile delays multiplied by `scale`
    ///
    /// Negative or non-finite scales fall back to 1.0.
    pub fn simulated(scale: f64) -> Self {
        let scale = if scale.is_finite() && scale >= 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            enabled: true,
            scale,
        }
    }

    /// Answer immediately
    pub fn none() -> Self {
        Self {
            enabled: false,
            scale: 0.0,
        }
    }

    async fn wait(self, delay: Duration) {
        if !self.enabled || delay.is_zero() {
            return;
        }
        tokio::time::sleep(delay.mul_f64(self.scale)).await;
    }
}

impl Default for Latency {
    fn default() -> Self {
        Self::simulated(1.0)
    }
}

/// Mock provider backed by the shared catalog
pub struct MockSource {
    profile: SourceProfile,
    catalog: Arc<Catalog>,
    latency: Latency,
    authenticated: AtomicBool,
    pending_auth_failures: AtomicU32,
}

impl MockSource {
    pub fn new(profile: SourceProfile, catalog: Arc<Catalog>, latency: Latency) -> Self {
        let authenticated = AtomicBool::new(profile.starts_authenticated);
        Self {
            profile,
            catalog,
            latency,
            authenticated,
            pending_auth_failures: AtomicU32::new(0),
        }
    }

    /// Make the next `count` authentication attempts fail
    pub fn fail_next_authentications(&self, count: u32) {
        self.pending_auth_failures.store(count, Ordering::SeqCst);
    }

    /// Behavior profile of this source
    pub fn profile(&self) -> &SourceProfile {
        &self.profile
    }

    fn take_auth_failure(&self) -> bool {
        self.pending_auth_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok()
    }

    fn search_catalog(&self, query: &str) -> SearchResults {
        let search = &self.profile.search;
        let limit = |n: fn(&SearchLimits) -> usize| {
            search.limits.as_ref().map_or(usize::MAX, n)
        };

        let tracks = self
            .catalog
            .tracks
            .iter()
            .filter(|t| {
                contains_normalized(&t.title, query)
                    || contains_normalized(&t.artist, query)
                    || (search.match_track_album && contains_normalized(&t.album, query))
            })
            .take(limit(|l| l.tracks))
            .cloned()
            .collect();

        let albums = self
            .catalog
            .albums
            .iter()
            .filter(|a| contains_normalized(&a.title, query) || contains_normalized(&a.artist, query))
            .take(limit(|l| l.albums))
            .cloned()
            .collect();

        let playlists = self
            .catalog
            .playlists
            .iter()
            .filter(|p| {
                contains_normalized(&p.name, query)
                    || (search.match_playlist_description
                        && option_contains_normalized(p.description.as_deref(), query))
            })
            .take(limit(|l| l.playlists))
            .cloned()
            .collect();

        SearchResults {
            tracks,
            albums,
            artists: Vec::new(),
            playlists,
        }
    }
}

#[async_trait]
impl MusicSource for MockSource {
    fn info(&self) -> &SourceInfo {
        &self.profile.info
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated.load(Ordering::SeqCst)
    }

    async fn authenticate(&self) -> Result<()> {
        self.latency.wait(self.profile.auth_delay).await;

        if self.take_auth_failure() {
            warn!(source = %self.id(), "Authentication failed");
            return Err(CadenceError::authentication(
                self.id(),
                "simulated authentication failure",
            ));
        }

        self.authenticated.store(true, Ordering::SeqCst);
        info!(source = %self.id(), "Authenticated");
        Ok(())
    }

    async fn search(&self, query: &str) -> Result<SearchResults> {
        self.latency.wait(self.profile.search.delay).await;

        let Some(query) = normalize_query(query) else {
            return Ok(SearchResults::default());
        };

        let results = self.search_catalog(&query);
        debug!(source = %self.id(), query = %query, results = results.total(), "Search completed");
        Ok(results)
    }

    async fn get_playlists(&self) -> Result<Vec<Playlist>> {
        self.latency.wait(self.profile.playlists.delay).await;
        Ok(self.profile.playlists.slice(&self.catalog.playlists))
    }

    async fn get_albums(&self) -> Result<Vec<Album>> {
        self.latency.wait(self.profile.albums.delay).await;
        Ok(self.profile.albums.slice(&self.catalog.albums))
    }

    async fn get_top_tracks(&self) -> Result<Vec<Track>> {
        self.latency.wait(self.profile.top_tracks.delay).await;
        Ok(self.profile.top_tracks.slice(&self.catalog.tracks))
    }

    async fn get_recommendations(&self) -> Result<Vec<Track>> {
        self.latency.wait(self.profile.recommendations.delay).await;
        Ok(self.profile.recommendations.slice(&self.catalog.tracks))
    }
}
