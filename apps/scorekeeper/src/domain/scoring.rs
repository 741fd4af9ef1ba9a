use serde::{Deserialize, Serialize};

use crate::domain::rules::{LOSE_PENALTY, STREAK_PAYOUT, WIN_BASE, WIN_BONUS};
use crate::domain::state::Game;
use crate::errors::domain::{DomainError, ValidationKind};

/// A player's streak counters. At most one is non-zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Streaks {
    pub win: u8,
    pub lose: u8,
}

/// Outcome of one hand for one player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HandScore {
    /// Signed change to the player's total.
    pub delta: i32,
    pub won: bool,
    /// The 5th consecutive outcome paid out a bonus (won) or penalty (lost).
    pub streak_payout: bool,
    pub streaks_after: Streaks,
}

/// Score one player's bid/result for a hand, given their streaks going in.
pub fn score_hand(bid: u8, result: u8, trick_limit: u8, before: Streaks) -> HandScore {
    let single_trick = trick_limit == 1;
    let bid_pts = i32::from(bid);
    let miss = (bid_pts - i32::from(result)).abs();

    if bid == result {
        if single_trick {
            return HandScore {
                delta: WIN_BASE + bid_pts,
                won: true,
                streak_payout: false,
                streaks_after: before,
            };
        }
        let win = before.win.saturating_add(1);
        let payout = win >= STREAK_PAYOUT;
        HandScore {
            delta: if payout { WIN_BONUS } else { WIN_BASE } + bid_pts,
            won: true,
            streak_payout: payout,
            streaks_after: Streaks {
                win: if payout { 0 } else { win },
                lose: 0,
            },
        }
    } else {
        if single_trick {
            return HandScore {
                delta: -miss,
                won: false,
                streak_payout: false,
                streaks_after: before,
            };
        }
        let lose = before.lose.saturating_add(1);
        let payout = lose >= STREAK_PAYOUT;
        HandScore {
            delta: -(if payout { LOSE_PENALTY + miss } else { miss }),
            won: false,
            streak_payout: payout,
            streaks_after: Streaks {
                win: 0,
                lose: if payout { 0 } else { lose },
            },
        }
    }
}

/// What one call to [`apply_results`] changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringOutcome {
    pub hand_no: u8,
    /// Per-seat scores for the hand.
    pub scores: Vec<HandScore>,
    pub finished: bool,
}

/// Record results for the current hand, update every player and advance.
///
/// All preconditions are checked before anything is mutated; on error the
/// game is unchanged.
pub fn apply_results(
    game: &mut Game,
    hand_index: usize,
    results: &[u8],
) -> Result<ScoringOutcome, DomainError> {
    if game.finished {
        return Err(DomainError::validation(
            ValidationKind::GameFinished,
            "game is already finished",
        ));
    }
    if hand_index != game.current_hand_index {
        return Err(DomainError::validation(
            ValidationKind::HandOutOfOrder,
            format!(
                "results for hand index {hand_index} but current hand index is {}",
                game.current_hand_index
            ),
        ));
    }
    let hand = game.hands.get(hand_index).ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: no hand at index {hand_index}"
        ))
    })?;
    if hand.has_any_result() {
        return Err(DomainError::validation(
            ValidationKind::ResultsAlreadyRecorded,
            format!("hand {} already has results", hand.hand_no),
        ));
    }
    let bids: Vec<u8> = hand.bids.iter().copied().collect::<Option<_>>().ok_or_else(|| {
        DomainError::validation(
            ValidationKind::IncompleteBids,
            format!("hand {} is missing bids", hand.hand_no),
        )
    })?;
    validate_results(hand.trick_limit, hand.hand_no, bids.len(), results)?;
    if game.players.len() != bids.len() {
        return Err(DomainError::validation_other(format!(
            "Invariant violated: {} players but {} bids",
            game.players.len(),
            bids.len()
        )));
    }

    let trick_limit = hand.trick_limit;
    let hand_no = hand.hand_no;
    let scores: Vec<HandScore> = game
        .players
        .iter()
        .zip(bids.iter().zip(results))
        .map(|(player, (&bid, &result))| score_hand(bid, result, trick_limit, player.streaks()))
        .collect();

    // Everything validated; mutate.
    game.hands[hand_index].results = results.iter().copied().map(Some).collect();
    for (player, score) in game.players.iter_mut().zip(&scores) {
        player.apply(score);
    }
    if game.is_last_hand(hand_index) {
        game.finished = true;
    } else {
        game.current_hand_index += 1;
    }

    Ok(ScoringOutcome {
        hand_no,
        scores,
        finished: game.finished,
    })
}

/// Check a result submission: one value per player, each within the
/// trick-limit, adding up to exactly the trick-limit.
pub fn validate_results(
    trick_limit: u8,
    hand_no: u8,
    players: usize,
    results: &[u8],
) -> Result<(), DomainError> {
    if results.len() != players {
        return Err(DomainError::validation(
            ValidationKind::InvalidResult,
            format!("expected {players} results, got {}", results.len()),
        ));
    }
    if let Some((seat, r)) = results.iter().enumerate().find(|(_, r)| **r > trick_limit) {
        return Err(DomainError::validation(
            ValidationKind::InvalidResult,
            format!("result {r} for seat {seat} exceeds trick-limit {trick_limit} on hand {hand_no}"),
        ));
    }
    let sum: u32 = results.iter().copied().map(u32::from).sum();
    if sum != u32::from(trick_limit) {
        return Err(DomainError::validation(
            ValidationKind::ResultSumMismatch,
            format!("results add up to {sum}, hand {hand_no} has {trick_limit} tricks"),
        ));
    }
    Ok(())
}
