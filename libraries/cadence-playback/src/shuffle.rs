//! Next-track selection
//!
//! Shuffle is a selection policy, not a reordering: with shuffle on, any
//! queue entry may come next with equal probability; with shuffle off, the
//! entry after the current track plays, wrapping to the start.

use crate::queue::Queue;
use rand::Rng;

/// Pick the queue index that `play_next` should play
///
/// Returns `None` only for an empty queue. Repeat mode is not consulted:
/// sequential selection always wraps around.
pub(crate) fn select_next<R: Rng + ?Sized>(
    queue: &Queue,
    current_id: Option<&str>,
    shuffle: bool,
    rng: &mut R,
) -> Option<usize> {
    if queue.is_empty() {
        return None;
    }

    if shuffle {
        return Some(rng.gen_range(0..queue.len()));
    }

    // Unknown current track behaves like index -1, so the first entry plays
    let next = match current_id.and_then(|id| queue.position_of(id)) {
        Some(index) => index + 1,
        None => 0,
    };
    Some(next % queue.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cadence_core::Track;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;
    use std::time::Duration;

    fn queue_of(ids: &[&str]) -> Queue {
        let mut queue = Queue::new();
        for id in ids {
            queue.push(Track::new(
                *id,
                format!("Track {}", id),
                "Artist",
                "Album",
                Duration::from_secs(120),
            ));
        }
        queue
    }

    #[test]
    fn empty_queue_selects_nothing() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(select_next(&Queue::new(), None, false, &mut rng), None);
        assert_eq!(select_next(&Queue::new(), None, true, &mut rng), None);
    }

    #[test]
    fn sequential_advances_and_wraps() {
        let queue = queue_of(&["a", "b", "c"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_next(&queue, Some("a"), false, &mut rng), Some(1));
        assert_eq!(select_next(&queue, Some("b"), false, &mut rng), Some(2));
        assert_eq!(select_next(&queue, Some("c"), false, &mut rng), Some(0));
    }

    #[test]
    fn sequential_without_current_starts_at_first() {
        let queue = queue_of(&["a", "b"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_next(&queue, None, false, &mut rng), Some(0));
        assert_eq!(select_next(&queue, Some("zzz"), false, &mut rng), Some(0));
    }

    #[test]
    fn sequential_uses_first_duplicate() {
        let queue = queue_of(&["a", "b", "a", "c"]);
        let mut rng = StdRng::seed_from_u64(1);

        assert_eq!(select_next(&queue, Some("a"), false, &mut rng), Some(1));
    }

    #[test]
    fn shuffle_stays_in_bounds_and_covers_queue() {
        let queue = queue_of(&["a", "b", "c", "d"]);
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = HashSet::new();

        for _ in 0..200 {
            let index = select_next(&queue, Some("a"), true, &mut rng).unwrap();
            assert!(index < queue.len());
            seen.insert(index);
        }

        // Selection is independent of the current track, so every index shows up
        assert_eq!(seen.len(), 4);
    }
}
