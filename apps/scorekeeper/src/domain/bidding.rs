//! Bid entry rules.
//!
//! Bidding starts at the dealer and moves to increasing seats. The last bidder
//! (the seat just before the dealer) may not pick the value that would make the
//! bids add up to the trick-limit.

use crate::domain::rules::valid_bid_range;
use crate::domain::state::{Game, Hand, Seat};
use crate::errors::domain::{DomainError, ValidationKind};

/// Seats in bidding order for this hand.
pub fn bidding_order(hand: &Hand) -> impl Iterator<Item = Seat> + '_ {
    let n = hand.player_count();
    (0..n).map(move |step| (hand.dealer + step) % n)
}

/// Seats in the order results are entered; like bids, starting at the dealer.
pub fn result_entry_order(hand: &Hand) -> impl Iterator<Item = Seat> + '_ {
    bidding_order(hand)
}

pub fn last_bidder(hand: &Hand) -> Seat {
    let n = hand.player_count();
    (hand.dealer + n - 1) % n
}

/// First seat in bidding order without a bid.
pub fn next_bidder(hand: &Hand, bids: &[Option<u8>]) -> Option<Seat> {
    bidding_order(hand).find(|&seat| bids.get(seat).copied().flatten().is_none())
}

fn others_sum(bids: &[Option<u8>], seat: Seat) -> u32 {
    bids.iter()
        .enumerate()
        .filter(|(i, _)| *i != seat)
        .filter_map(|(_, b)| *b)
        .map(u32::from)
        .sum()
}

/// The value `seat` may not bid, given the bids entered so far.
///
/// Only the last bidder is restricted; missing bids count as zero.
pub fn forbidden_bid(hand: &Hand, bids: &[Option<u8>], seat: Seat) -> Option<u8> {
    if seat != last_bidder(hand) {
        return None;
    }
    let limit = u32::from(hand.trick_limit);
    let others = others_sum(bids, seat);
    if others > limit {
        return None;
    }
    let completing = (limit - others) as u8;
    (completing <= hand.bid_ceiling).then_some(completing)
}

pub fn legal_bids_for(hand: &Hand, bids: &[Option<u8>], seat: Seat) -> Vec<u8> {
    let forbidden = forbidden_bid(hand, bids, seat);
    valid_bid_range(hand.bid_ceiling)
        .filter(|b| Some(*b) != forbidden)
        .collect()
}

/// When the last bidder has exactly one legal value, that value.
pub fn forced_bid(hand: &Hand, bids: &[Option<u8>], seat: Seat) -> Option<u8> {
    if seat != last_bidder(hand) {
        return None;
    }
    match legal_bids_for(hand, bids, seat).as_slice() {
        [only] => Some(*only),
        _ => None,
    }
}

/// Check a complete bid set for `hand`.
pub fn validate_bids(hand: &Hand, bids: &[u8]) -> Result<(), DomainError> {
    let n = hand.player_count();
    if bids.len() != n {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!("expected {n} bids, got {}", bids.len()),
        ));
    }
    if let Some((seat, bid)) = bids
        .iter()
        .enumerate()
        .find(|(_, b)| !valid_bid_range(hand.bid_ceiling).contains(*b))
    {
        return Err(DomainError::validation(
            ValidationKind::InvalidBid,
            format!(
                "bid {bid} for seat {seat} exceeds ceiling {} on hand {}",
                hand.bid_ceiling, hand.hand_no
            ),
        ));
    }
    let sum: u32 = bids.iter().copied().map(u32::from).sum();
    if sum == u32::from(hand.trick_limit) {
        return Err(DomainError::validation(
            ValidationKind::ForbiddenBidSum,
            format!(
                "bids may not add up to the trick-limit {} on hand {}",
                hand.trick_limit, hand.hand_no
            ),
        ));
    }
    Ok(())
}

/// Record (or replace) the bids for the current hand.
///
/// Bids stay editable until results are entered for the hand.
pub fn place_bids(game: &mut Game, bids: &[u8]) -> Result<(), DomainError> {
    if game.finished {
        return Err(DomainError::validation(
            ValidationKind::GameFinished,
            "game is already finished",
        ));
    }
    let index = game.current_hand_index;
    let hand = game.hands.get_mut(index).ok_or_else(|| {
        DomainError::validation_other(format!(
            "Invariant violated: no hand at current index {index}"
        ))
    })?;
    if hand.has_any_result() {
        return Err(DomainError::validation(
            ValidationKind::ResultsAlreadyRecorded,
            format!("hand {} already has results; bids are locked", hand.hand_no),
        ));
    }
    validate_bids(hand, bids)?;
    hand.bids = bids.iter().copied().map(Some).collect();
    Ok(())
}
