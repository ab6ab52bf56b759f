//! Deterministic demo catalog shared by every simulated source

use cadence_core::{Album, Artist, Playlist, Track};
use chrono::{DateTime, Duration as ChronoDuration, Utc};
use std::time::Duration;

const SOURCE_IDS: [&str; 4] = ["spotify", "youtube-music", "soundcloud", "local"];

const ARTISTS: [(&str, &str); 10] = [
    ("Nadia Rowe", "Songwriter working between folk and ambient electronics."),
    ("The Velvet Static", "Four-piece shoegaze band from Leeds."),
    ("Kairo", "Producer known for slow, bass-heavy house."),
    ("Marisol Vega", "Jazz vocalist and pianist."),
    ("Northbound", "Post-rock instrumental trio."),
    ("Ivy Lane", "Bedroom pop project."),
    ("Juno Park", "Synthwave composer and film scorer."),
    ("Low Orbit", "Downtempo duo."),
    ("Ella Quinn", "Singer-songwriter with a country edge."),
    ("Static Bloom", "Noise pop collective."),
];

// (title, artist index, year, genre)
const ALBUMS: [(&str, usize, u32, &str); 16] = [
    ("Low Tide", 0, 2019, "Folk"),
    ("Glass Harbor", 1, 2021, "Shoegaze"),
    ("Midnight Transit", 2, 2020, "House"),
    ("Blue Room Sessions", 3, 2018, "Jazz"),
    ("Long Way North", 4, 2022, "Post-Rock"),
    ("Paper Moons", 5, 2023, "Pop"),
    ("Chrome Horizon", 6, 2021, "Synthwave"),
    ("Weightless", 7, 2017, "Downtempo"),
    ("Dust Roads", 8, 2020, "Country"),
    ("Bloom", 9, 2022, "Indie"),
    ("Saltwater", 0, 2023, "Folk"),
    ("Feedback Loops", 1, 2023, "Shoegaze"),
    ("After Hours", 2, 2024, "House"),
    ("Late Set", 3, 2021, "Jazz"),
    ("Neon Nights", 6, 2024, "Synthwave"),
    ("Slow Motion", 7, 2020, "Downtempo"),
];

const TRACKS_PER_ALBUM: usize = 4;

const TITLE_FIRST: [&str; 8] = [
    "Blue", "Golden", "Silent", "Electric", "Paper", "Distant", "Velvet", "Hollow",
];

const TITLE_SECOND: [&str; 8] = [
    "Hour", "Lights", "River", "Signal", "Garden", "Echo", "Skyline", "Fever",
];

// (name, description)
const PLAYLISTS: [(&str, &str); 12] = [
    ("Morning Coffee", "Gentle songs to start the day"),
    ("Deep Focus", "Instrumental tracks for concentration"),
    ("Night Drive", "Synths and city lights"),
    ("Rainy Day", "Soft and slow for grey afternoons"),
    ("Workout Mix", "High energy to keep moving"),
    ("Chill Vibes", "Laid-back grooves"),
    ("Jazz Classics", "Smoky rooms and late sets"),
    ("Indie Discoveries", "Fresh finds from independent artists"),
    ("Road Trip", "Sing-alongs for the open road"),
    ("Sleep", "Ambient textures to drift off"),
    ("Throwbacks", "Favourites from a few years ago"),
    ("Weekend", "Party starters and sunny tunes"),
];

const TRACKS_PER_PLAYLIST: usize = 8;

fn cover_url(kind: &str, index: usize) -> String {
    format!("https://picsum.photos/seed/{kind}-{index}/300/300")
}

fn epoch() -> DateTime<Utc> {
    // 2024-01-01T00:00:00Z
    DateTime::from_timestamp(1_704_067_200, 0).unwrap_or_default()
}

/// In-memory catalog of tracks, albums, artists, and playlists
///
/// Simulated sources serve slices of one shared catalog, the way the mock
/// providers all draw on the same demo data set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub tracks: Vec<Track>,
    pub albums: Vec<Album>,
    pub artists: Vec<Artist>,
    pub playlists: Vec<Playlist>,
}

impl Catalog {
    /// Build the demo catalog
    ///
    /// Output is fully deterministic: same ids, titles, durations, and
    /// timestamps on every call.
    pub fn demo() -> Self {
        let base = epoch();

        let mut tracks = Vec::with_capacity(ALBUMS.len() * TRACKS_PER_ALBUM);
        let mut albums = Vec::with_capacity(ALBUMS.len());

        for (album_index, (title, artist_index, year, genre)) in ALBUMS.iter().enumerate() {
            let artist = ARTISTS[*artist_index].0;
            let album_cover = cover_url("album", album_index + 1);

            let album_tracks: Vec<Track> = (0..TRACKS_PER_ALBUM)
                .map(|n| {
                    let i = album_index * TRACKS_PER_ALBUM + n;
                    let track_title = format!("{} {}", TITLE_FIRST[i / 8], TITLE_SECOND[i % 8]);
                    let mut track = Track::new(
                        format!("track-{}", i + 1),
                        track_title,
                        artist,
                        *title,
                        Duration::from_secs(150 + (i as u64 * 37) % 150),
                    )
                    .with_source(SOURCE_IDS[i % SOURCE_IDS.len()])
                    .with_cover(album_cover.clone());
                    track.genre = Some((*genre).to_string());
                    track.year = Some(*year);
                    track.play_count = Some(((i as u32 + 1) * 7919) % 100_000);
                    track.added_at = Some(base + ChronoDuration::days(i as i64));
                    track
                })
                .collect();

            tracks.extend(album_tracks.iter().cloned());
            albums.push(Album {
                id: format!("album-{}", album_index + 1),
                title: (*title).to_string(),
                artist: artist.to_string(),
                cover_url: album_cover,
                year: Some(*year),
                genre: Some((*genre).to_string()),
                tracks: album_tracks,
            });
        }

        let artists = ARTISTS
            .iter()
            .enumerate()
            .map(|(index, (name, bio))| {
                let own_albums: Vec<Album> = albums
                    .iter()
                    .filter(|a| a.artist == *name)
                    .cloned()
                    .collect();
                let top_tracks = own_albums
                    .iter()
                    .flat_map(|a| a.tracks.iter().cloned())
                    .take(5)
                    .collect();
                Artist {
                    id: format!("artist-{}", index + 1),
                    name: (*name).to_string(),
                    image_url: cover_url("artist", index + 1),
                    bio: Some((*bio).to_string()),
                    followers: Some(12_000 + index as u64 * 48_317),
                    albums: own_albums,
                    top_tracks,
                }
            })
            .collect();

        let playlists = PLAYLISTS
            .iter()
            .enumerate()
            .map(|(index, (name, description))| {
                let created_at = base + ChronoDuration::days(index as i64 * 3);
                let playlist_tracks = tracks
                    .iter()
                    .skip(index)
                    .step_by(5)
                    .take(TRACKS_PER_PLAYLIST)
                    .cloned()
                    .collect();
                Playlist {
                    id: format!("playlist-{}", index + 1),
                    name: (*name).to_string(),
                    description: Some((*description).to_string()),
                    cover_url: cover_url("playlist", index + 1),
                    tracks: playlist_tracks,
                    created_at,
                    updated_at: created_at + ChronoDuration::days(30),
                    is_public: index % 3 != 0,
                    owner: Some("Cadence".to_string()),
                }
            })
            .collect();

        Self {
            tracks,
            albums,
            artists,
            playlists,
        }
    }

    /// Look up a track by id
    pub fn track(&self, id: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }
}
