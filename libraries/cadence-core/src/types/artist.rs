/// Artist domain type
use super::{Album, Track};
use serde::{Deserialize, Serialize};

/// Artist profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<u64>,
    #[serde(default)]
    pub albums: Vec<Album>,
    #[serde(default)]
    pub top_tracks: Vec<Track>,
}
