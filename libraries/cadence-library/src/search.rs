//! Case-insensitive substring search over the library catalog

use cadence_core::text::{contains_normalized, normalize_query, option_contains_normalized};
use cadence_core::{Album, Artist, Playlist, SearchResults, Track};

/// Match each record type on its own fields
///
/// Tracks match on title, artist, or album; albums on title or artist;
/// artists on name; playlists on name or description.
pub(crate) fn search_catalog(
    query: &str,
    tracks: &[Track],
    albums: &[Album],
    artists: &[Artist],
    playlists: &[Playlist],
) -> SearchResults {
    let Some(q) = normalize_query(query) else {
        return SearchResults::default();
    };

    SearchResults {
        tracks: tracks.iter().filter(|t| t.matches(&q)).cloned().collect(),
        albums: albums
            .iter()
            .filter(|a| contains_normalized(&a.title, &q) || contains_normalized(&a.artist, &q))
            .cloned()
            .collect(),
        artists: artists
            .iter()
            .filter(|a| contains_normalized(&a.name, &q))
            .cloned()
            .collect(),
        playlists: playlists
            .iter()
            .filter(|p| {
                contains_normalized(&p.name, &q)
                    || option_contains_normalized(p.description.as_deref(), &q)
            })
            .cloned()
            .collect(),
    }
}
