//! Play queue
//!
//! Ordered, caller-managed list of tracks slated to play. The same track may
//! appear more than once; shuffle never reorders the queue, it only changes
//! which entry `play_next` picks.

use cadence_core::Track;

/// Play queue in insertion order
#[derive(Debug, Clone, Default)]
pub struct Queue {
    tracks: Vec<Track>,
}

impl Queue {
    /// Create new empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Append track to the end of the queue
    pub fn push(&mut self, track: Track) {
        self.tracks.push(track);
    }

    /// Remove every entry with the given id
    ///
    /// Returns the number of entries removed.
    pub fn remove_by_id(&mut self, track_id: &str) -> usize {
        let before = self.tracks.len();
        self.tracks.retain(|t| t.id != track_id);
        before - self.tracks.len()
    }

    /// Clear entire queue
    pub fn clear(&mut self) {
        self.tracks.clear();
    }

    /// Get track at index
    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    /// Index of the first entry with the given id
    pub fn position_of(&self, track_id: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t.id == track_id)
    }

    /// All tracks in queue order
    pub fn as_slice(&self) -> &[Track] {
        &self.tracks
    }

    /// Total number of tracks in queue
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    /// Check if queue is empty
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
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

    fn ids(queue: &Queue) -> Vec<&str> {
        queue.as_slice().iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn create_empty_queue() {
        let queue = Queue::new();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
    }

    #[test]
    fn push_keeps_insertion_order() {
        let mut queue = Queue::new();
        queue.push(create_test_track("1"));
        queue.push(create_test_track("2"));
        queue.push(create_test_track("1"));

        assert_eq!(ids(&queue), vec!["1", "2", "1"]);
    }

    #[test]
    fn remove_by_id_removes_all_duplicates() {
        let mut queue = Queue::new();
        queue.push(create_test_track("1"));
        queue.push(create_test_track("2"));
        queue.push(create_test_track("1"));
        queue.push(create_test_track("3"));

        assert_eq!(queue.remove_by_id("1"), 2);
        assert_eq!(ids(&queue), vec!["2", "3"]);
    }

    #[test]
    fn remove_unknown_id_is_noop() {
        let mut queue = Queue::new();
        queue.push(create_test_track("1"));

        assert_eq!(queue.remove_by_id("missing"), 0);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn position_of_finds_first_match() {
        let mut queue = Queue::new();
        queue.push(create_test_track("1"));
        queue.push(create_test_track("2"));
        queue.push(create_test_track("2"));

        assert_eq!(queue.position_of("2"), Some(1));
        assert_eq!(queue.position_of("9"), None);
    }

    #[test]
    fn clear_queue() {
        let mut queue = Queue::new();
        queue.push(create_test_track("1"));
        queue.clear();
        assert!(queue.is_empty());
    }
}
