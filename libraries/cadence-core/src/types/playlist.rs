/// Playlist domain type
use super::Track;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User or source playlist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub cover_url: String,
    #[serde(default)]
    pub tracks: Vec<Track>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub is_public: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
}

impl Playlist {
    /// Apply a partial update, leaving unset fields untouched
    ///
    /// Does not touch `updated_at`; the caller stamps the edit.
    pub fn apply(&mut self, update: PlaylistUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(cover_url) = update.cover_url {
            self.cover_url = cover_url;
        }
        if let Some(is_public) = update.is_public {
            self.is_public = is_public;
        }
    }
}

/// Partial playlist edit
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub cover_url: Option<String>,
    pub is_public: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn playlist() -> Playlist {
        let now = Utc::now();
        Playlist {
            id: "p1".to_string(),
            name: "Focus".to_string(),
            description: None,
            cover_url: "cover.jpg".to_string(),
            tracks: Vec::new(),
            created_at: now,
            updated_at: now,
            is_public: false,
            owner: Some("user".to_string()),
        }
    }

    #[test]
    fn apply_only_touches_set_fields() {
        let mut p = playlist();
        p.apply(PlaylistUpdate {
            name: Some("Deep Focus".to_string()),
            is_public: Some(true),
            ..Default::default()
        });

        assert_eq!(p.name, "Deep Focus");
        assert!(p.is_public);
        assert_eq!(p.cover_url, "cover.jpg");
        assert!(p.description.is_none());
    }
}
