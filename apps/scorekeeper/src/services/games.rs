//! Game service: load on entry, save after every mutation.

use sea_orm::ConnectionTrait;
use time::OffsetDateTime;
use tracing::{debug, info};
use ulid::Ulid;

use crate::domain::bidding::place_bids;
use crate::domain::scoreboard::{standings, Scoreboard};
use crate::domain::scoring::{apply_results, ScoringOutcome};
use crate::domain::setup::GameConfig;
use crate::domain::state::{Game, Player};
use crate::error::AppError;
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::saved_state;

/// Scorekeeping service - generic over ConnectionTrait.
pub struct GameService;

impl GameService {
    pub fn new() -> Self {
        Self
    }

    /// The current setup selection (defaults when none was saved).
    pub async fn setup<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<GameConfig, AppError> {
        Ok(saved_state::load_game_config(conn).await?)
    }

    pub async fn configure<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        config: GameConfig,
    ) -> Result<(), AppError> {
        saved_state::save_game_config(conn, &config).await?;
        info!(variant = %config.variant, player_count = %config.player_count, "Saved game setup");
        Ok(())
    }

    /// Start a new game from the saved setup, replacing any saved game.
    pub async fn start_game<C, S>(&self, conn: &C, names: &[S]) -> Result<Game, AppError>
    where
        C: ConnectionTrait + Send + Sync,
        S: AsRef<str>,
    {
        let config = saved_state::load_game_config(conn).await?;
        let game = Game::start(Ulid::new().to_string(), &config, names, now_millis())?;
        saved_state::save_game(conn, &game).await?;
        info!(
            game_id = %game.id,
            variant = %game.variant,
            player_count = %game.player_count,
            hands = game.hands.len(),
            "Started game"
        );
        Ok(game)
    }

    /// The saved game; `GAME_NOT_FOUND` when there is none.
    pub async fn resume<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Game, AppError> {
        saved_state::load_game(conn).await?.ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Game, "No saved game to resume").into()
        })
    }

    pub async fn has_saved_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<bool, AppError> {
        Ok(saved_state::has_saved_game(conn).await?)
    }

    pub async fn discard_game<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<bool, AppError> {
        let removed = saved_state::clear_game(conn).await?;
        info!(removed, "Discarded saved game");
        Ok(removed)
    }

    /// Record bids for the current hand and save.
    pub async fn submit_bids<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        bids: &[u8],
    ) -> Result<Game, AppError> {
        let mut game = self.resume(conn).await?;
        place_bids(&mut game, bids)?;
        saved_state::save_game(conn, &game).await?;
        debug!(
            game_id = %game.id,
            hand_index = game.current_hand_index,
            ?bids,
            "Bids recorded"
        );
        Ok(game)
    }

    /// Record results for `hand_index`, score the hand and save.
    pub async fn submit_results<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
        hand_index: usize,
        results: &[u8],
    ) -> Result<(Game, ScoringOutcome), AppError> {
        let mut game = self.resume(conn).await?;
        let outcome = apply_results(&mut game, hand_index, results)?;
        saved_state::save_game(conn, &game).await?;

        let payouts = outcome.scores.iter().filter(|s| s.streak_payout).count();
        info!(
            game_id = %game.id,
            hand_no = outcome.hand_no,
            payouts,
            finished = outcome.finished,
            "Hand scored"
        );
        Ok((game, outcome))
    }

    pub async fn scoreboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Scoreboard, AppError> {
        let game = self.resume(conn).await?;
        Ok(Scoreboard::build(&game))
    }

    /// Players ordered by points, highest first.
    pub async fn final_standings<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Vec<Player>, AppError> {
        let game = self.resume(conn).await?;
        Ok(standings(&game).into_iter().cloned().collect())
    }
}

impl Default for GameService {
    fn default() -> Self {
        Self::new()
    }
}

fn now_millis() -> i64 {
    (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
}
