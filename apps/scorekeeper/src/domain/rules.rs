use std::fmt::{Display, Formatter, Result as FmtResult};
use std::iter;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::state::Hand;
use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_TRICKS: u8 = 1;
pub const MAX_TRICKS: u8 = 8;

/// Consecutive non-single-trick outcomes that trigger a bonus or penalty.
pub const STREAK_PAYOUT: u8 = 5;
/// Points for a made bid: `WIN_BASE + bid`, or `WIN_BONUS + bid` on a payout hand.
pub const WIN_BASE: i32 = 5;
pub const WIN_BONUS: i32 = 10;
/// Extra deduction on the 5th consecutive missed bid.
pub const LOSE_PENALTY: i32 = 5;

/// Game variant: the shape of the trick-limit schedule.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Variant {
    /// 1s, 2..=7, 8s, 7..=2, 1s
    #[default]
    #[serde(rename = "11-88-11")]
    AscendFirst,
    /// 8s, 7..=2, 1s, 2..=7, 8s
    #[serde(rename = "88-11-88")]
    DescendFirst,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::AscendFirst, Variant::DescendFirst];

    pub fn tag(&self) -> &'static str {
        match self {
            Variant::AscendFirst => "11-88-11",
            Variant::DescendFirst => "88-11-88",
        }
    }
}

impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.tag())
    }
}

impl FromStr for Variant {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Variant::ALL
            .into_iter()
            .find(|v| v.tag() == s)
            .ok_or_else(|| {
                DomainError::validation(
                    ValidationKind::InvalidVariant,
                    format!("unknown game variant '{s}'"),
                )
            })
    }
}

/// Number of players at the table: 4, 5 or 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct PlayerCount(u8);

impl PlayerCount {
    pub const MIN: u8 = 4;
    pub const MAX: u8 = 6;

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn as_usize(self) -> usize {
        self.0 as usize
    }

    pub fn all() -> impl Iterator<Item = PlayerCount> {
        (Self::MIN..=Self::MAX).map(PlayerCount)
    }
}

impl Default for PlayerCount {
    fn default() -> Self {
        PlayerCount(Self::MIN)
    }
}

impl TryFrom<u8> for PlayerCount {
    type Error = DomainError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&n) {
            Ok(PlayerCount(n))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidPlayerCount,
                format!(
                    "player count must be between {} and {}, got {n}",
                    Self::MIN,
                    Self::MAX
                ),
            ))
        }
    }
}

impl From<PlayerCount> for u8 {
    fn from(n: PlayerCount) -> Self {
        n.0
    }
}

impl Display for PlayerCount {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.0)
    }
}

/// Number of hands in a game: `n` hands at each of the three plateaus plus
/// two runs of six single hands between them.
pub fn hand_count(players: PlayerCount) -> usize {
    3 * players.as_usize() + 12
}

/// Trick-limit for every hand of the game, in play order.
pub fn trick_limit_schedule(variant: Variant, players: PlayerCount) -> Vec<u8> {
    let n = players.as_usize();
    let plateau = |limit: u8| iter::repeat(limit).take(n);
    let up = 2..=7u8;
    let down = (2..=7u8).rev();

    match variant {
        Variant::AscendFirst => plateau(MIN_TRICKS)
            .chain(up)
            .chain(plateau(MAX_TRICKS))
            .chain(down)
            .chain(plateau(MIN_TRICKS))
            .collect(),
        Variant::DescendFirst => plateau(MAX_TRICKS)
            .chain(down)
            .chain(plateau(MIN_TRICKS))
            .chain(up)
            .chain(plateau(MAX_TRICKS))
            .collect(),
    }
}

/// Materialize the full hand list for a new game.
pub fn generate_hands(variant: Variant, players: PlayerCount) -> Vec<Hand> {
    trick_limit_schedule(variant, players)
        .into_iter()
        .enumerate()
        .map(|(index, trick_limit)| Hand::new(index, trick_limit, players))
        .collect()
}

pub fn valid_bid_range(bid_ceiling: u8) -> RangeInclusive<u8> {
    0..=bid_ceiling
}
