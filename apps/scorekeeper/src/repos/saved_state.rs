//! The two persisted records: the last game and the setup selection.
//!
//! Both live as JSON text in `kv_records`, one row per key. The record is
//! always rewritten whole.

use sea_orm::ConnectionTrait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::adapters::kv_sea as kv_adapter;
use crate::domain::setup::GameConfig;
use crate::domain::state::Game;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::infra::db_errors::map_db_err;

pub const LAST_GAME_KEY: &str = "whist:lastGame";
pub const GAME_CONFIG_KEY: &str = "whist:gameConfig";

async fn read_json<C, T>(conn: &C, key: &str) -> Result<Option<T>, DomainError>
where
    C: ConnectionTrait + Send + Sync,
    T: DeserializeOwned,
{
    let Some(row) = kv_adapter::find_by_key(conn, key).await.map_err(map_db_err)? else {
        return Ok(None);
    };
    serde_json::from_str(&row.value).map(Some).map_err(|e| {
        warn!(key, error = %e, "Stored record is not valid JSON for its type");
        DomainError::infra(
            InfraErrorKind::DataCorruption,
            format!("record '{key}' could not be decoded: {e}"),
        )
    })
}

async fn write_json<C, T>(conn: &C, key: &str, value: &T) -> Result<(), DomainError>
where
    C: ConnectionTrait + Send + Sync,
    T: Serialize,
{
    let json = serde_json::to_string(value).map_err(|e| {
        DomainError::infra(
            InfraErrorKind::Other("Serialize".into()),
            format!("record '{key}' could not be encoded: {e}"),
        )
    })?;
    kv_adapter::upsert(conn, key, json)
        .await
        .map_err(map_db_err)
}

/// Load the saved game, if any.
///
/// Records written without a hand list get one generated here and are saved
/// back, so callers always see a complete game.
pub async fn load_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<Option<Game>, DomainError> {
    let Some(mut game) = read_json::<C, Game>(conn, LAST_GAME_KEY).await? else {
        return Ok(None);
    };
    if game.ensure_hands() {
        info!(game_id = %game.id, hands = game.hands.len(), "Generated hands for legacy game record");
        write_json(conn, LAST_GAME_KEY, &game).await?;
    }
    debug!(game_id = %game.id, current_hand_index = game.current_hand_index, "Loaded game");
    Ok(Some(game))
}

pub async fn save_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    game: &Game,
) -> Result<(), DomainError> {
    write_json(conn, LAST_GAME_KEY, game).await?;
    debug!(game_id = %game.id, finished = game.finished, "Saved game");
    Ok(())
}

/// Forget the saved game. Returns whether one existed.
pub async fn clear_game<C: ConnectionTrait + Send + Sync>(conn: &C) -> Result<bool, DomainError> {
    let removed = kv_adapter::delete(conn, LAST_GAME_KEY)
        .await
        .map_err(map_db_err)?;
    Ok(removed > 0)
}

pub async fn has_saved_game<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<bool, DomainError> {
    let row = kv_adapter::find_by_key(conn, LAST_GAME_KEY)
        .await
        .map_err(map_db_err)?;
    Ok(row.is_some())
}

/// The saved setup selection, or the default one when nothing is stored.
pub async fn load_game_config<C: ConnectionTrait + Send + Sync>(
    conn: &C,
) -> Result<GameConfig, DomainError> {
    Ok(read_json(conn, GAME_CONFIG_KEY).await?.unwrap_or_default())
}

pub async fn save_game_config<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    config: &GameConfig,
) -> Result<(), DomainError> {
    write_json(conn, GAME_CONFIG_KEY, config).await
}
