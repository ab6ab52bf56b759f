//! Per-provider behavior of the simulated sources
//!
//! Each profile captures what distinguishes one mock provider from another:
//! latency per operation, which catalog slice each listing returns, and how
//! search matches and truncates.

use cadence_core::SourceInfo;
use std::ops::Range;
use std::time::Duration;

/// Everything in the catalog
const ALL: Range<usize> = 0..usize::MAX;

/// Maximum result counts per search category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    pub tracks: usize,
    pub albums: usize,
    pub playlists: usize,
}

/// Search behavior
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchProfile {
    pub delay: Duration,

    /// `None` returns every match
    pub limits: Option<SearchLimits>,

    /// Match tracks on album name as well as title and artist
    pub match_track_album: bool,

    /// Match playlists on description as well as name
    pub match_playlist_description: bool,
}

/// Delay and catalog slice for a listing operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub delay: Duration,
    pub range: Range<usize>,
}

impl Listing {
    fn new(delay_ms: u64, range: Range<usize>) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            range,
        }
    }

    /// Copy the configured slice out of `items`, clamped to its length
    pub fn slice<T: Clone>(&self, items: &[T]) -> Vec<T> {
        let end = self.range.end.min(items.len());
        let start = self.range.start.min(end);
        items[start..end].to_vec()
    }
}

/// Complete description of one simulated provider
#[derive(Debug, Clone, PartialEq)]
pub struct SourceProfile {
    pub info: SourceInfo,
    pub auth_delay: Duration,
    pub starts_authenticated: bool,
    pub search: SearchProfile,
    pub playlists: Listing,
    pub albums: Listing,
    pub top_tracks: Listing,
    pub recommendations: Listing,
}

fn info(id: &str, name: &str, icon: &str, color: &str) -> SourceInfo {
    SourceInfo {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        color: color.to_string(),
    }
}

fn remote_search(delay_ms: u64, tracks: usize, albums: usize, playlists: usize) -> SearchProfile {
    SearchProfile {
        delay: Duration::from_millis(delay_ms),
        limits: Some(SearchLimits {
            tracks,
            albums,
            playlists,
        }),
        match_track_album: false,
        match_playlist_description: false,
    }
}

impl SourceProfile {
    pub fn spotify() -> Self {
        Self {
            info: info("spotify", "Spotify", "Music", "#1DB954"),
            auth_delay: Duration::from_millis(1000),
            starts_authenticated: false,
            search: remote_search(300, 20, 10, 10),
            playlists: Listing::new(500, 0..10),
            albums: Listing::new(500, 0..15),
            top_tracks: Listing::new(300, 0..50),
            recommendations: Listing::new(400, 10..30),
        }
    }

    pub fn youtube_music() -> Self {
        Self {
            info: info("youtube-music", "YouTube Music", "Play", "#FF0000"),
            auth_delay: Duration::from_millis(1200),
            starts_authenticated: false,
            search: remote_search(400, 25, 12, 8),
            playlists: Listing::new(600, 2..12),
            albums: Listing::new(550, 1..16),
            top_tracks: Listing::new(350, 5..55),
            recommendations: Listing::new(450, 15..35),
        }
    }

    pub fn soundcloud() -> Self {
        Self {
            info: info("soundcloud", "SoundCloud", "Radio", "#FF5500"),
            auth_delay: Duration::from_millis(800),
            starts_authenticated: false,
            search: remote_search(350, 30, 8, 12),
            playlists: Listing::new(450, 1..8),
            albums: Listing::new(500, 0..12),
            top_tracks: Listing::new(300, 3..53),
            recommendations: Listing::new(400, 20..40),
        }
    }

    /// Local files: always authenticated, unbounded search, no listing delay
    pub fn local() -> Self {
        Self {
            info: info("local", "Local Files", "HardDrive", "#6B7280"),
            auth_delay: Duration::ZERO,
            starts_authenticated: true,
            search: SearchProfile {
                delay: Duration::from_millis(100),
                limits: None,
                match_track_album: true,
                match_playlist_description: true,
            },
            playlists: Listing::new(0, ALL),
            albums: Listing::new(0, ALL),
            top_tracks: Listing::new(0, 0..50),
            recommendations: Listing::new(0, 25..50),
        }
    }

    /// The four built-in providers, in registry order
    pub fn builtin() -> Vec<Self> {
        vec![
            Self::spotify(),
            Self::youtube_music(),
            Self::soundcloud(),
            Self::local(),
        ]
    }
}
