//! Domain layer: pure scorekeeping logic and types.

pub mod bidding;
pub mod history;
pub mod rules;
pub mod scoreboard;
pub mod scoring;
pub mod setup;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_bidding;
#[cfg(test)]
mod tests_props_rules;
#[cfg(test)]
mod tests_props_scoring;

// Re-exports for ergonomics
pub use rules::{generate_hands, hand_count, PlayerCount, Variant};
pub use scoreboard::{standings, Scoreboard};
pub use scoring::{apply_results, score_hand, HandScore, ScoringOutcome, Streaks};
pub use setup::GameConfig;
pub use state::{Game, Hand, Player, Seat};
