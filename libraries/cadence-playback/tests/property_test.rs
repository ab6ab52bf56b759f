//! Property-based tests for the playback transport
//!
//! Uses proptest to check invariants across random inputs and operation sequences.

use cadence_core::Track;
use cadence_playback::{Transport, TransportConfig};
use proptest::prelude::*;
use std::time::Duration;

// ===== Helpers =====

fn track_with_id(id: String) -> Track {
    Track::new(
        id.clone(),
        format!("Track {}", id),
        "Artist",
        "Album",
        Duration::from_secs(200),
    )
}

fn arbitrary_id() -> impl Strategy<Value = String> {
    "[a-e]{1,2}"
}

#[derive(Debug, Clone)]
enum Op {
    SetCurrent(String),
    Enqueue(String),
    Remove(String),
    Next,
    Previous,
    ToggleShuffle,
    ClearQueue,
}

fn arbitrary_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        arbitrary_id().prop_map(Op::SetCurrent),
        arbitrary_id().prop_map(Op::Enqueue),
        arbitrary_id().prop_map(Op::Remove),
        Just(Op::Next),
        Just(Op::Previous),
        Just(Op::ToggleShuffle),
        Just(Op::ClearQueue),
    ]
}

fn apply(transport: &mut Transport, op: Op) {
    match op {
        Op::SetCurrent(id) => transport.set_current_track(track_with_id(id)),
        Op::Enqueue(id) => transport.add_to_queue(track_with_id(id)),
        Op::Remove(id) => transport.remove_from_queue(&id),
        Op::Next => {
            transport.play_next();
        }
        Op::Previous => {
            transport.play_previous();
        }
        Op::ToggleShuffle => transport.toggle_shuffle(),
        Op::ClearQueue => transport.clear_queue(),
    }
}

// ===== Property Tests =====

proptest! {
    /// Property: mute flag mirrors a zero volume right after set_volume
    #[test]
    fn muted_iff_volume_zero(level in prop_oneof![Just(0.0f32), -1.0f32..2.0]) {
        let mut transport = Transport::default();
        transport.set_volume(level);

        prop_assert_eq!(transport.is_muted(), level == 0.0);
        prop_assert_eq!(transport.volume(), level);
    }

    /// Property: history never exceeds capacity and keeps the newest entries
    #[test]
    fn history_is_bounded(count in 0usize..60) {
        let mut transport = Transport::default();
        for i in 0..count {
            transport.set_current_track(track_with_id(i.to_string()));
        }

        let pushed = count.saturating_sub(1);
        prop_assert_eq!(transport.history().len(), pushed.min(20));

        if pushed > 0 {
            let newest = transport.history().iter().last().map(|t| t.id.clone());
            prop_assert_eq!(newest, Some((count - 2).to_string()));
        }
    }

    /// Property: removing an id leaves no entry with that id and keeps the rest in order
    #[test]
    fn remove_filters_every_match(
        ids in prop::collection::vec(arbitrary_id(), 0..30),
        target in arbitrary_id(),
    ) {
        let mut transport = Transport::default();
        for id in &ids {
            transport.add_to_queue(track_with_id(id.clone()));
        }

        transport.remove_from_queue(&target);

        let remaining: Vec<_> = transport.queue().as_slice().iter().map(|t| t.id.clone()).collect();
        let expected: Vec<_> = ids.into_iter().filter(|id| *id != target).collect();
        prop_assert_eq!(remaining, expected);
    }

    /// Property: with a non-empty queue, play_next always lands on a queued track
    #[test]
    fn next_lands_in_queue(
        ids in prop::collection::vec(arbitrary_id(), 1..20),
        shuffle in any::<bool>(),
        seed in any::<u64>(),
        steps in 1usize..20,
    ) {
        let mut transport = Transport::new(TransportConfig {
            shuffle,
            shuffle_seed: Some(seed),
            ..Default::default()
        });
        for id in &ids {
            transport.add_to_queue(track_with_id(id.clone()));
        }

        for _ in 0..steps {
            prop_assert!(transport.play_next());
            let current = transport.current_track().map(|t| t.id.clone()).unwrap_or_default();
            prop_assert!(ids.contains(&current));
            prop_assert!(transport.is_playing());
            prop_assert_eq!(transport.position(), Duration::ZERO);
        }
    }

    /// Property: invariants hold across arbitrary operation sequences
    #[test]
    fn invariants_hold_for_any_sequence(ops in prop::collection::vec(arbitrary_op(), 0..80)) {
        let mut transport = Transport::default();

        for op in ops {
            apply(&mut transport, op);

            prop_assert!(transport.history().len() <= 20);
            if transport.current_track().is_none() {
                prop_assert!(transport.history().is_empty());
            }
        }
    }
}
