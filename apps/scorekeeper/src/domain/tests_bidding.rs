use crate::domain::bidding::{
    bidding_order, forbidden_bid, forced_bid, last_bidder, legal_bids_for, next_bidder,
    place_bids, result_entry_order, validate_bids,
};
use crate::domain::rules::Variant;
use crate::domain::test_state_helpers::make_game;
use crate::errors::domain::ValidationKind;

#[test]
fn bidding_starts_at_dealer_and_ends_before_it() {
    let game = make_game(Variant::AscendFirst, 5);
    let hand = &game.hands[2];
    assert_eq!(hand.dealer, 2);
    assert_eq!(bidding_order(hand).collect::<Vec<_>>(), vec![2, 3, 4, 0, 1]);
    assert_eq!(last_bidder(hand), 1);

    let first = &game.hands[0];
    assert_eq!(last_bidder(first), 4);
}

#[test]
fn results_are_entered_from_the_dealer() {
    let game = make_game(Variant::DescendFirst, 6);
    let hand = &game.hands[9];
    assert_eq!(hand.dealer, 3);
    assert_eq!(
        result_entry_order(hand).collect::<Vec<_>>(),
        vec![3, 4, 5, 0, 1, 2]
    );
}

#[test]
fn next_bidder_skips_seats_that_already_bid() {
    let game = make_game(Variant::AscendFirst, 4);
    let hand = &game.hands[2];
    assert_eq!(next_bidder(hand, &hand.bids), Some(2));

    let bids = [None, Some(1), Some(0), Some(0)];
    assert_eq!(next_bidder(hand, &bids), Some(0));

    let all = [Some(0); 4];
    assert_eq!(next_bidder(hand, &all), None);
}

#[test]
fn last_bidder_may_not_complete_the_trick_limit() {
    let game = make_game(Variant::DescendFirst, 4);
    let hand = &game.hands[0];
    assert_eq!(hand.trick_limit, 8);

    let bids = [Some(2), Some(3), Some(1), None];
    assert_eq!(forbidden_bid(hand, &bids, 3), Some(2));
    let legal = legal_bids_for(hand, &bids, 3);
    assert_eq!(legal, vec![0, 1, 3, 4, 5, 6, 7, 8]);
    assert_eq!(forced_bid(hand, &bids, 3), None);

    // Earlier bidders are never restricted.
    assert_eq!(forbidden_bid(hand, &bids, 1), None);
    assert_eq!(legal_bids_for(hand, &bids, 1).len(), 9);
}

#[test]
fn no_restriction_once_others_overbid() {
    let game = make_game(Variant::AscendFirst, 4);
    let hand = &game.hands[0];
    let bids = [Some(1), Some(1), Some(0), None];
    assert_eq!(forbidden_bid(hand, &bids, 3), None);
    assert_eq!(legal_bids_for(hand, &bids, 3), vec![0, 1]);
}

#[test]
fn single_trick_last_bidder_is_forced() {
    let game = make_game(Variant::AscendFirst, 4);
    let hand = &game.hands[0];
    assert_eq!(hand.trick_limit, 1);

    let zeros = [Some(0), Some(0), Some(0), None];
    assert_eq!(forced_bid(hand, &zeros, 3), Some(0));

    let one_taken = [Some(1), Some(0), Some(0), None];
    assert_eq!(forced_bid(hand, &one_taken, 3), Some(1));

    assert_eq!(forced_bid(hand, &zeros, 2), None);
}

#[test]
fn validate_bids_checks_count_range_and_sum() {
    let game = make_game(Variant::AscendFirst, 4);
    let hand = &game.hands[4];
    assert_eq!(hand.trick_limit, 2);

    assert!(validate_bids(hand, &[0, 0, 1, 0]).is_ok());
    assert!(validate_bids(hand, &[2, 1, 0, 0]).is_ok());

    let kind = |bids: &[u8]| validate_bids(hand, bids).unwrap_err().validation_kind();
    assert_eq!(kind(&[0, 0, 0]), Some(ValidationKind::InvalidBid));
    assert_eq!(kind(&[3, 0, 0, 0]), Some(ValidationKind::InvalidBid));
    assert_eq!(kind(&[1, 1, 0, 0]), Some(ValidationKind::ForbiddenBidSum));
}

#[test]
fn bids_can_be_replaced_until_results_exist() {
    let mut game = make_game(Variant::DescendFirst, 4);
    place_bids(&mut game, &[1, 1, 1, 1]).unwrap();
    place_bids(&mut game, &[2, 2, 2, 0]).unwrap();
    assert_eq!(game.hands[0].bids, vec![Some(2), Some(2), Some(2), Some(0)]);
    assert!(game.can_enter_results());

    game.hands[0].results[0] = Some(8);
    let err = place_bids(&mut game, &[0, 0, 0, 0]).unwrap_err();
    assert_eq!(
        err.validation_kind(),
        Some(ValidationKind::ResultsAlreadyRecorded)
    );
    assert_eq!(game.hands[0].bids, vec![Some(2), Some(2), Some(2), Some(0)]);
}

#[test]
fn rejected_bids_leave_previous_bids_in_place() {
    let mut game = make_game(Variant::DescendFirst, 4);
    place_bids(&mut game, &[1, 1, 1, 1]).unwrap();

    let err = place_bids(&mut game, &[2, 2, 2, 2]).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::ForbiddenBidSum));
    assert_eq!(game.hands[0].bids, vec![Some(1); 4]);
}

#[test]
fn finished_game_rejects_bids() {
    let mut game = make_game(Variant::AscendFirst, 4);
    game.finished = true;
    let err = place_bids(&mut game, &[0, 0, 0, 0]).unwrap_err();
    assert_eq!(err.validation_kind(), Some(ValidationKind::GameFinished));
}
