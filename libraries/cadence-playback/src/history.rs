//! Playback history tracking
//!
//! Maintains a bounded history of previously-current tracks for "previous" navigation

use cadence_core::Track;
use std::collections::VecDeque;

use crate::types::DEFAULT_HISTORY_SIZE;

/// Playback history with bounded size
///
/// Implements a ring buffer that discards the oldest entry once full.
#[derive(Debug, Clone)]
pub struct History {
    /// History buffer (most recent = back)
    tracks: VecDeque<Track>,

    /// Maximum history size
    max_size: usize,
}

impl History {
    /// Create new history with specified maximum size
    pub fn new(max_size: usize) -> Self {
        Self {
            tracks: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Add track to history
    ///
    /// If history is full, oldest track is discarded
    pub fn push(&mut self, track: Track) {
        if self.max_size == 0 {
            return;
        }
        if self.tracks.len() >= self.max_size {
            self.tracks.pop_front(); // Remove oldest
        }
        self.tracks.push_back(track);
    }

    /// Get most recent track (without removing)
    pub fn peek(&self) -> Option<&Track> {
        self.tracks.back()
    }

    /// Pop most recent track from history
    pub fn pop(&mut self) -> Option<Track> {
        self.tracks.pop_back()
    }

    /// Iterate over history (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter()
    }

    /// Get number of tracks in history
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if history is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Clear all history
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Get maximum history size
    pub fn max_size(&self) -> usize {
        self.max_size
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn create_test_track(id: &str) -> Track {
        Track::new(
            id,
            format!("Track {}", id),
            "Test Artist",
            "Test Album",
            Duration::from_secs(180),
        )
    }

    fn ids(history: &History) -> Vec<&str> {
        history.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn create_history() {
        let history = History::new(10);
        assert_eq!(history.max_size(), 10);
        assert_eq!(history.len(), 0);
        assert!(history.is_empty());
    }

    #[test]
    fn peek_most_recent() {
        let mut history = History::new(10);
        history.push(create_test_track("1"));
        history.push(create_test_track("2"));

        assert_eq!(history.peek().unwrap().id, "2");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn pop_from_history() {
        let mut history = History::new(10);
        history.push(create_test_track("1"));
        history.push(create_test_track("2"));
        history.push(create_test_track("3"));

        assert_eq!(history.pop().unwrap().id, "3");
        assert_eq!(history.pop().unwrap().id, "2");
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn history_bounded() {
        let mut history = History::new(3);

        for id in ["1", "2", "3", "4"] {
            history.push(create_test_track(id));
        }

        // Track 1 discarded
        assert_eq!(history.len(), 3);
        assert_eq!(ids(&history), vec!["2", "3", "4"]);
    }

    #[test]
    fn duplicates_are_kept() {
        let mut history = History::new(5);
        history.push(create_test_track("1"));
        history.push(create_test_track("1"));

        assert_eq!(ids(&history), vec!["1", "1"]);
    }

    #[test]
    fn zero_capacity_keeps_nothing() {
        let mut history = History::new(0);
        history.push(create_test_track("1"));
        assert!(history.is_empty());
    }

    #[test]
    fn clear_history() {
        let mut history = History::new(10);
        history.push(create_test_track("1"));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn default_history() {
        assert_eq!(History::default().max_size(), 20);
    }
}
