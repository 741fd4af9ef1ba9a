//! Per-hand score history, rebuilt from the hand list.
//!
//! Nothing here reads the stored player totals or streaks: every value is
//! replayed from hand 0 with [`score_hand`], so the history always agrees
//! with what [`apply_results`](crate::domain::scoring::apply_results) stored.

use crate::domain::scoring::{score_hand, HandScore, Streaks};
use crate::domain::state::{Game, Hand, Seat};

fn bid_and_result(hand: &Hand, seat: Seat) -> Option<(u8, u8)> {
    let bid = hand.bids.get(seat).copied().flatten()?;
    let result = hand.results.get(seat).copied().flatten()?;
    Some((bid, result))
}

/// Scores for `seat` on every hand in order; `None` where the hand has no result yet.
pub fn player_history(game: &Game, seat: Seat) -> Vec<Option<HandScore>> {
    game.hands
        .iter()
        .scan(Streaks::default(), |streaks, hand| {
            let score = bid_and_result(hand, seat)
                .map(|(bid, result)| score_hand(bid, result, hand.trick_limit, *streaks));
            if let Some(s) = &score {
                *streaks = s.streaks_after;
            }
            Some(score)
        })
        .collect()
}

/// Streaks for `seat` going into the hand at `hand_index`.
pub fn streaks_before(game: &Game, seat: Seat, hand_index: usize) -> Streaks {
    game.hands
        .iter()
        .take(hand_index)
        .fold(Streaks::default(), |streaks, hand| {
            match bid_and_result(hand, seat) {
                Some((bid, result)) => score_hand(bid, result, hand.trick_limit, streaks).streaks_after,
                None => streaks,
            }
        })
}

/// The score `seat` earned on the hand at `hand_index`, if it has a result.
pub fn hand_delta(game: &Game, seat: Seat, hand_index: usize) -> Option<HandScore> {
    let hand = game.hands.get(hand_index)?;
    let (bid, result) = bid_and_result(hand, seat)?;
    Some(score_hand(
        bid,
        result,
        hand.trick_limit,
        streaks_before(game, seat, hand_index),
    ))
}

/// Totals and streaks for every seat, replayed from the hand list.
pub fn replay_totals(game: &Game) -> Vec<(i32, Streaks)> {
    (0..game.players.len())
        .map(|seat| {
            player_history(game, seat).into_iter().flatten().fold(
                (0, Streaks::default()),
                |(points, _), score| (points + score.delta, score.streaks_after),
            )
        })
        .collect()
}
