use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::rules::{self, PlayerCount, Variant};
use crate::domain::scoring::{HandScore, Streaks};
use crate::domain::setup::GameConfig;
use crate::errors::domain::{DomainError, ValidationKind};

/// Position at the table (0-based), also the index into per-player lists.
pub type Seat = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub name: String,
    pub points: i32,
    /// Consecutive made bids on hands with more than one trick.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub win_streak: u8,
    /// Consecutive missed bids on hands with more than one trick.
    #[serde(default, deserialize_with = "null_as_zero")]
    pub lose_streak: u8,
}

/// Older records may carry `null` streaks.
fn null_as_zero<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    Ok(Option::<u8>::deserialize(deserializer)?.unwrap_or(0))
}

impl Player {
    pub fn new(seat: Seat, name: impl Into<String>) -> Self {
        Self {
            id: seat.to_string(),
            name: name.into(),
            points: 0,
            win_streak: 0,
            lose_streak: 0,
        }
    }

    pub fn streaks(&self) -> Streaks {
        Streaks {
            win: self.win_streak,
            lose: self.lose_streak,
        }
    }

    pub(crate) fn apply(&mut self, score: &HandScore) {
        self.points += score.delta;
        self.win_streak = score.streaks_after.win;
        self.lose_streak = score.streaks_after.lose;
    }
}

/// One round of play.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hand {
    /// 1-based position in the game.
    pub hand_no: u8,
    #[serde(rename = "maxTricks")]
    pub trick_limit: u8,
    /// Largest value a single bid may take; equals the trick-limit.
    #[serde(rename = "maxBids")]
    pub bid_ceiling: u8,
    #[serde(rename = "dealerIndex")]
    pub dealer: Seat,
    pub bids: Vec<Option<u8>>,
    pub results: Vec<Option<u8>>,
}

impl Hand {
    pub fn new(index: usize, trick_limit: u8, players: PlayerCount) -> Self {
        let n = players.as_usize();
        Self {
            hand_no: (index + 1) as u8,
            trick_limit,
            bid_ceiling: trick_limit,
            dealer: dealer_for_hand(index, players),
            bids: vec![None; n],
            results: vec![None; n],
        }
    }

    /// Hands with a single trick score points but never touch streaks.
    pub fn is_single_trick(&self) -> bool {
        self.trick_limit == 1
    }

    pub fn is_bid_complete(&self) -> bool {
        self.bids.iter().all(Option::is_some)
    }

    pub fn is_result_complete(&self) -> bool {
        self.results.iter().all(Option::is_some)
    }

    pub fn has_any_result(&self) -> bool {
        self.results.iter().any(Option::is_some)
    }

    pub fn player_count(&self) -> usize {
        self.bids.len()
    }
}

/// The unit of persistence: one game from setup to final standings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: String,
    #[serde(rename = "type")]
    pub variant: Variant,
    pub player_count: PlayerCount,
    pub players: Vec<Player>,
    /// Empty only in records written before hands were generated up front.
    #[serde(default)]
    pub hands: Vec<Hand>,
    #[serde(default)]
    pub current_hand_index: usize,
    #[serde(rename = "isFinished", default)]
    pub finished: bool,
    /// Milliseconds since the Unix epoch.
    pub created_at: i64,
}

impl Game {
    /// Create a game from the setup selection and the entered names.
    ///
    /// Names are trimmed; blank names fall back to `Player N`.
    pub fn start<S: AsRef<str>>(
        id: impl Into<String>,
        config: &GameConfig,
        names: &[S],
        created_at: i64,
    ) -> Result<Self, DomainError> {
        let n = config.player_count.as_usize();
        if names.len() != n {
            return Err(DomainError::validation(
                ValidationKind::InvalidPlayerNames,
                format!("expected {n} player names, got {}", names.len()),
            ));
        }

        let players = names
            .iter()
            .enumerate()
            .map(|(seat, name)| Player::new(seat, display_name(seat, name.as_ref())))
            .collect();

        Ok(Self {
            id: id.into(),
            variant: config.variant,
            player_count: config.player_count,
            players,
            hands: rules::generate_hands(config.variant, config.player_count),
            current_hand_index: 0,
            finished: false,
            created_at,
        })
    }

    /// Generate the hand list for records that were saved without one.
    /// Returns true when hands were generated.
    pub fn ensure_hands(&mut self) -> bool {
        if !self.hands.is_empty() {
            return false;
        }
        self.hands = rules::generate_hands(self.variant, self.player_count);
        true
    }

    pub fn current_hand(&self) -> Option<&Hand> {
        self.hands.get(self.current_hand_index)
    }

    /// Bids may be entered (or edited) until the current hand has results.
    pub fn can_place_bids(&self) -> bool {
        !self.finished && self.current_hand().is_some_and(|h| !h.has_any_result())
    }

    pub fn can_enter_results(&self) -> bool {
        !self.finished
            && self
                .current_hand()
                .is_some_and(|h| h.is_bid_complete() && !h.has_any_result())
    }

    pub fn is_last_hand(&self, index: usize) -> bool {
        index + 1 >= self.hands.len()
    }
}

fn display_name(seat: Seat, raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        default_player_name(seat)
    } else {
        trimmed.to_string()
    }
}

pub fn default_player_name(seat: Seat) -> String {
    format!("Player {}", seat + 1)
}

/// Dealer for the hand at 0-based `hand_index`.
#[inline]
pub fn dealer_for_hand(hand_index: usize, players: PlayerCount) -> Seat {
    hand_index % players.as_usize()
}
