/// Album domain type
use super::Track;
use serde::{Deserialize, Serialize};

/// Album as listed by a music source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub cover_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Album {
    /// Total running time of all tracks
    pub fn total_duration(&self) -> std::time::Duration {
        self.tracks.iter().map(|t| t.duration).sum()
    }
}
