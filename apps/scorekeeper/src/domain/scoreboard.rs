//! Read-only score table for display.

use serde::Serialize;

use crate::domain::history::player_history;
use crate::domain::scoring::HandScore;
use crate::domain::state::{Game, Player, Seat};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerHeader {
    pub seat: Seat,
    pub name: String,
    pub points: i32,
    pub win_streak: u8,
    pub lose_streak: u8,
    /// Deals the current hand (the last hand once the game is over).
    pub is_dealer: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCell {
    pub bid: Option<u8>,
    pub result: Option<u8>,
    pub score: Option<HandScore>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreRow {
    pub hand_no: u8,
    pub trick_limit: u8,
    pub bid_ceiling: u8,
    /// Scores points but leaves streaks alone.
    pub single_trick: bool,
    pub dealer: Seat,
    pub cells: Vec<ScoreCell>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Scoreboard {
    pub headers: Vec<PlayerHeader>,
    /// Hands played so far, up to and including the current one.
    pub rows: Vec<ScoreRow>,
    pub can_place_bids: bool,
    pub can_enter_results: bool,
    pub finished: bool,
}

impl Scoreboard {
    pub fn build(game: &Game) -> Self {
        let current_dealer = game.current_hand().map(|h| h.dealer);
        let headers = game
            .players
            .iter()
            .enumerate()
            .map(|(seat, p)| PlayerHeader {
                seat,
                name: p.name.clone(),
                points: p.points,
                win_streak: p.win_streak,
                lose_streak: p.lose_streak,
                is_dealer: current_dealer == Some(seat),
            })
            .collect();

        let histories: Vec<Vec<Option<HandScore>>> = (0..game.players.len())
            .map(|seat| player_history(game, seat))
            .collect();

        let visible = (game.current_hand_index + 1).min(game.hands.len());
        let rows = game.hands[..visible]
            .iter()
            .enumerate()
            .map(|(index, hand)| ScoreRow {
                hand_no: hand.hand_no,
                trick_limit: hand.trick_limit,
                bid_ceiling: hand.bid_ceiling,
                single_trick: hand.is_single_trick(),
                dealer: hand.dealer,
                cells: histories
                    .iter()
                    .enumerate()
                    .map(|(seat, history)| ScoreCell {
                        bid: hand.bids.get(seat).copied().flatten(),
                        result: hand.results.get(seat).copied().flatten(),
                        score: history.get(index).copied().flatten(),
                    })
                    .collect(),
            })
            .collect();

        Self {
            headers,
            rows,
            can_place_bids: game.can_place_bids(),
            can_enter_results: game.can_enter_results(),
            finished: game.finished,
        }
    }
}

/// Players ordered by points, highest first; ties keep seat order.
pub fn standings(game: &Game) -> Vec<&Player> {
    let mut players: Vec<&Player> = game.players.iter().collect();
    players.sort_by(|a, b| b.points.cmp(&a.points));
    players
}
