#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod domain;
pub mod entities;
pub mod error;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;
pub mod state;
pub mod telemetry;


// Re-exports for public API
pub use config::store::{store_kind_from_env, store_url, StoreKind};
pub use domain::{
    generate_hands, hand_count, standings, Game, GameConfig, Hand, HandScore, Player,
    PlayerCount, Scoreboard, ScoringOutcome, Seat, Streaks, Variant,
};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode};
pub use infra::db::connect_store;
pub use infra::state::{build_state, StateBuilder};
pub use services::games::GameService;
pub use state::app_state::AppState;
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
