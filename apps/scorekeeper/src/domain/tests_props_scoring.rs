//! Property tests for scoring and streaks (pure domain).

use proptest::prelude::*;

use crate::domain::bidding::{last_bidder, legal_bids_for, place_bids};
use crate::domain::history::replay_totals;
use crate::domain::rules::{PlayerCount, Variant, MAX_TRICKS, MIN_TRICKS, STREAK_PAYOUT};
use crate::domain::scoring::{apply_results, score_hand, Streaks};
use crate::domain::state::Game;
use crate::domain::test_prelude;
use crate::domain::test_state_helpers::make_game;

fn streaks() -> impl Strategy<Value = Streaks> {
    prop_oneof![
        (0..STREAK_PAYOUT).prop_map(|win| Streaks { win, lose: 0 }),
        (0..STREAK_PAYOUT).prop_map(|lose| Streaks { win: 0, lose }),
    ]
}

fn bid_result_limit() -> impl Strategy<Value = (u8, u8, u8)> {
    (MIN_TRICKS..=MAX_TRICKS).prop_flat_map(|limit| (0..=limit, 0..=limit, Just(limit)))
}

/// Raw material for one hand: a bid per seat (reduced modulo the ceiling) and
/// an owner per trick.
#[derive(Debug, Clone)]
struct HandPlay {
    bids: Vec<u8>,
    owners: Vec<usize>,
}

fn hand_play(n: usize) -> impl Strategy<Value = HandPlay> {
    (
        prop::collection::vec(0u8..=MAX_TRICKS, n),
        prop::collection::vec(0..n, usize::from(MAX_TRICKS)),
    )
        .prop_map(|(bids, owners)| HandPlay { bids, owners })
}

fn game_and_plays() -> impl Strategy<Value = (Game, Vec<HandPlay>)> {
    (
        prop_oneof![Just(Variant::AscendFirst), Just(Variant::DescendFirst)],
        PlayerCount::MIN..=PlayerCount::MAX,
    )
        .prop_flat_map(|(variant, n)| {
            let game = make_game(variant, n);
            let total = game.hands.len();
            (
                Just(game),
                prop::collection::vec(hand_play(usize::from(n)), 1..=total),
            )
        })
}

/// Turn raw material into a legal bid set and a result set for the current hand.
fn legal_submission(game: &Game, play: &HandPlay) -> (Vec<u8>, Vec<u8>) {
    let hand = game.current_hand().unwrap();
    let limit = hand.trick_limit;
    let mut bids: Vec<u8> = play.bids.iter().map(|b| b % (limit + 1)).collect();

    let last = last_bidder(hand);
    let mut partial: Vec<Option<u8>> = bids.iter().copied().map(Some).collect();
    partial[last] = None;
    let legal = legal_bids_for(hand, &partial, last);
    if !legal.contains(&bids[last]) {
        bids[last] = legal[0];
    }

    let mut results = vec![0u8; bids.len()];
    for &owner in play.owners.iter().take(usize::from(limit)) {
        results[owner] += 1;
    }
    (bids, results)
}

proptest! {
    #![proptest_config(test_prelude::proptest_config())]

    /// Stored streaks stay in [0, 4] and at most one is non-zero.
    #[test]
    fn prop_streak_invariant((bid, result, limit) in bid_result_limit(), before in streaks()) {
        let score = score_hand(bid, result, limit, before);
        let after = score.streaks_after;
        prop_assert!(after.win < STREAK_PAYOUT && after.lose < STREAK_PAYOUT);
        prop_assert!(after.win == 0 || after.lose == 0);
        if limit == 1 {
            prop_assert_eq!(after, before);
            prop_assert!(!score.streak_payout);
        }
    }

    /// Made bids always score at least five; missed bids always cost points.
    #[test]
    fn prop_delta_sign((bid, result, limit) in bid_result_limit(), before in streaks()) {
        let score = score_hand(bid, result, limit, before);
        prop_assert_eq!(score.won, bid == result);
        if score.won {
            prop_assert!(score.delta >= 5 + i32::from(bid));
        } else {
            prop_assert!(score.delta <= -i32::from(bid.abs_diff(result)));
            prop_assert!(score.delta < 0);
        }
    }

    /// A payout happens exactly when a fifth consecutive outcome lands.
    #[test]
    fn prop_payout_on_fifth((bid, result, limit) in bid_result_limit(), before in streaks()) {
        let score = score_hand(bid, result, limit, before);
        let running = if score.won { before.win } else { before.lose };
        let expected = limit > 1 && running + 1 == STREAK_PAYOUT;
        prop_assert_eq!(score.streak_payout, expected);
    }

    /// Playing any legal sequence of hands keeps every game invariant and the
    /// replayed history agrees with the stored players.
    #[test]
    fn prop_game_invariants_hold((mut game, plays) in game_and_plays()) {
        for play in &plays {
            let (bids, results) = legal_submission(&game, play);
            place_bids(&mut game, &bids).unwrap();
            let index = game.current_hand_index;
            apply_results(&mut game, index, &results).unwrap();

            for player in &game.players {
                prop_assert!(player.win_streak < STREAK_PAYOUT);
                prop_assert!(player.lose_streak < STREAK_PAYOUT);
                prop_assert!(player.win_streak == 0 || player.lose_streak == 0);
            }
        }

        for hand in game.hands.iter().filter(|h| h.is_result_complete()) {
            let results: u32 = hand.results.iter().flatten().copied().map(u32::from).sum();
            prop_assert_eq!(results, u32::from(hand.trick_limit));
            let bids: u32 = hand.bids.iter().flatten().copied().map(u32::from).sum();
            prop_assert_ne!(bids, u32::from(hand.trick_limit));
        }

        prop_assert_eq!(game.finished, plays.len() == game.hands.len());
        for (player, (points, streaks)) in game.players.iter().zip(replay_totals(&game)) {
            prop_assert_eq!(player.points, points);
            prop_assert_eq!(player.streaks(), streaks);
        }
    }
}
