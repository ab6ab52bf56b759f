/// Track domain type
use crate::text::{contains_normalized, normalize_query};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog track as resolved from a music source
///
/// Tracks are treated as immutable once fetched. Changing the liked flag
/// produces a new snapshot through [`Track::with_liked`]; the instance held
/// by the catalog is never edited in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: String,

    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name
    pub album: String,

    /// Track duration
    pub duration: Duration,

    /// Cover art reference
    pub cover_url: String,

    /// Identifier of the source this track was fetched from
    pub source_id: String,

    /// Genre
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,

    /// Release year
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,

    /// Whether the user liked this track
    #[serde(default)]
    pub liked: bool,

    /// Number of plays reported by the source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub play_count: Option<u32>,

    /// When the track was added to the user's library
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_at: Option<DateTime<Utc>>,
}

impl Track {
    /// Create a new track with minimal metadata
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        artist: impl Into<String>,
        album: impl Into<String>,
        duration: Duration,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            album: album.into(),
            duration,
            cover_url: String::new(),
            source_id: "local".to_string(),
            genre: None,
            year: None,
            liked: false,
            play_count: None,
            added_at: None,
        }
    }

    /// Set the source this track came from
    #[must_use]
    pub fn with_source(mut self, source_id: impl Into<String>) -> Self {
        self.source_id = source_id.into();
        self
    }

    /// Set the cover art reference
    #[must_use]
    pub fn with_cover(mut self, cover_url: impl Into<String>) -> Self {
        self.cover_url = cover_url.into();
        self
    }

    /// Copy of this track with the liked flag set
    #[must_use]
    pub fn with_liked(&self, liked: bool) -> Self {
        Self {
            liked,
            ..self.clone()
        }
    }

    /// Check whether title, artist, or album contains `query` (case-insensitive)
    pub fn matches(&self, query: &str) -> bool {
        normalize_query(query).is_some_and(|q| {
            contains_normalized(&self.title, &q)
                || contains_normalized(&self.artist, &q)
                || contains_normalized(&self.album, &q)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track() -> Track {
        Track::new(
            "t1",
            "Blue Hour",
            "Nadia Rowe",
            "Low Tide",
            Duration::from_secs(214),
        )
    }

    #[test]
    fn with_liked_leaves_original_untouched() {
        let original = track();
        let liked = original.with_liked(true);

        assert!(!original.liked);
        assert!(liked.liked);
        assert_eq!(liked.id, original.id);
        assert_eq!(liked.title, original.title);
    }

    #[test]
    fn matches_any_text_field() {
        let t = track();
        assert!(t.matches("blue"));
        assert!(t.matches("ROWE"));
        assert!(t.matches("tide"));
        assert!(!t.matches("sunrise"));
    }

    #[test]
    fn surrounding_whitespace_is_matched_literally() {
        let t = track();
        assert!(t.matches(" hour"));
        assert!(!t.matches(" blue"));
        assert!(!t.matches("tide "));
    }

    #[test]
    fn empty_query_matches_nothing() {
        assert!(!track().matches(""));
        assert!(!track().matches("  "));
    }

    #[test]
    fn deserializes_without_optional_fields() {
        let json = r#"{
            "id": "t9",
            "title": "Glass",
            "artist": "Orla",
            "album": "Prism",
            "duration": { "secs": 180, "nanos": 0 },
            "cover_url": "",
            "source_id": "spotify"
        }"#;

        let t: Track = serde_json::from_str(json).unwrap();
        assert_eq!(t.duration, Duration::from_secs(180));
        assert!(!t.liked);
        assert!(t.genre.is_none());
    }
}
