//! Error codes for the scorekeeper.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All error codes are SCREAMING_SNAKE_CASE.

use core::fmt;

use crate::errors::domain::ValidationKind;

/// Centralized error codes surfaced to the embedding UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Setup
    /// Unknown game variant tag
    InvalidVariant,
    /// Player count outside 4..=6
    InvalidPlayerCount,
    /// Wrong number of player names
    InvalidPlayerNames,

    // Bids and results
    /// Bid out of range or wrong number of bids
    InvalidBid,
    /// Bids sum to the trick-limit
    ForbiddenBidSum,
    /// Some player has no bid yet
    IncompleteBids,
    /// Result out of range or wrong number of results
    InvalidResult,
    /// Results do not sum to the trick-limit
    ResultSumMismatch,
    /// The hand already has results
    ResultsAlreadyRecorded,
    /// Submission targets a hand other than the current one
    HandOutOfOrder,
    /// The game is over
    GameFinished,
    /// General validation error
    ValidationError,

    // Records not found
    /// No saved game
    GameNotFound,
    /// General not found error
    NotFound,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout
    DbTimeout,
    /// Stored record could not be decoded
    DataCorruption,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidVariant => "INVALID_VARIANT",
            Self::InvalidPlayerCount => "INVALID_PLAYER_COUNT",
            Self::InvalidPlayerNames => "INVALID_PLAYER_NAMES",

            Self::InvalidBid => "INVALID_BID",
            Self::ForbiddenBidSum => "FORBIDDEN_BID_SUM",
            Self::IncompleteBids => "INCOMPLETE_BIDS",
            Self::InvalidResult => "INVALID_RESULT",
            Self::ResultSumMismatch => "RESULT_SUM_MISMATCH",
            Self::ResultsAlreadyRecorded => "RESULTS_ALREADY_RECORDED",
            Self::HandOutOfOrder => "HAND_OUT_OF_ORDER",
            Self::GameFinished => "GAME_FINISHED",
            Self::ValidationError => "VALIDATION_ERROR",

            Self::GameNotFound => "GAME_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::DataCorruption => "DATA_CORRUPTION",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl From<ValidationKind> for ErrorCode {
    fn from(kind: ValidationKind) -> Self {
        match kind {
            ValidationKind::InvalidVariant => Self::InvalidVariant,
            ValidationKind::InvalidPlayerCount => Self::InvalidPlayerCount,
            ValidationKind::InvalidPlayerNames => Self::InvalidPlayerNames,
            ValidationKind::InvalidBid => Self::InvalidBid,
            ValidationKind::ForbiddenBidSum => Self::ForbiddenBidSum,
            ValidationKind::IncompleteBids => Self::IncompleteBids,
            ValidationKind::InvalidResult => Self::InvalidResult,
            ValidationKind::ResultSumMismatch => Self::ResultSumMismatch,
            ValidationKind::ResultsAlreadyRecorded => Self::ResultsAlreadyRecorded,
            ValidationKind::HandOutOfOrder => Self::HandOutOfOrder,
            ValidationKind::GameFinished => Self::GameFinished,
            ValidationKind::Other => Self::ValidationError,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
