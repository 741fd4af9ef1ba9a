//! Property tests for the hand schedule (pure domain).

use proptest::prelude::*;

use crate::domain::rules::{
    generate_hands, hand_count, trick_limit_schedule, PlayerCount, Variant, MAX_TRICKS,
    MIN_TRICKS,
};
use crate::domain::test_prelude;

fn variant() -> impl Strategy<Value = Variant> {
    prop_oneof![Just(Variant::AscendFirst), Just(Variant::DescendFirst)]
}

fn player_count() -> impl Strategy<Value = PlayerCount> {
    prop::sample::select(PlayerCount::all().collect::<Vec<_>>())
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Every game has three plateaus of `n` hands plus two runs of six.
    #[test]
    fn prop_hand_count(variant in variant(), players in player_count()) {
        let hands = generate_hands(variant, players);
        prop_assert_eq!(hands.len(), hand_count(players));
        prop_assert_eq!(hands.len(), 3 * players.as_usize() + 12);
    }

    #[test]
    fn prop_hand_fields_consistent(variant in variant(), players in player_count()) {
        let n = players.as_usize();
        for (index, hand) in generate_hands(variant, players).iter().enumerate() {
            prop_assert_eq!(usize::from(hand.hand_no), index + 1);
            prop_assert_eq!(hand.bid_ceiling, hand.trick_limit);
            prop_assert!((MIN_TRICKS..=MAX_TRICKS).contains(&hand.trick_limit));
            prop_assert_eq!(hand.dealer, index % n);
            prop_assert_eq!(hand.bids.len(), n);
            prop_assert!(hand.bids.iter().all(Option::is_none));
            prop_assert!(hand.results.iter().all(Option::is_none));
        }
    }

    /// The schedule reads the same backwards, and the two variants mirror
    /// each other (1 <-> 8, 2 <-> 7, ...).
    #[test]
    fn prop_schedule_symmetry(players in player_count()) {
        let ascend = trick_limit_schedule(Variant::AscendFirst, players);
        let descend = trick_limit_schedule(Variant::DescendFirst, players);

        let mut reversed = ascend.clone();
        reversed.reverse();
        prop_assert_eq!(&reversed, &ascend);

        let mirrored: Vec<u8> = ascend.iter().map(|l| MIN_TRICKS + MAX_TRICKS - l).collect();
        prop_assert_eq!(mirrored, descend);
    }

    /// Neighbouring hands never differ by more than one trick.
    #[test]
    fn prop_schedule_steps_by_one(variant in variant(), players in player_count()) {
        let schedule = trick_limit_schedule(variant, players);
        for pair in schedule.windows(2) {
            prop_assert!(pair[0].abs_diff(pair[1]) <= 1, "{:?}", pair);
        }
    }
}
