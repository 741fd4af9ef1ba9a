use std::time::Duration;

use migration::migrate;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::config::store::{store_url, StoreKind};
use crate::error::AppError;

/// Open the store and bring its schema up to date.
pub async fn connect_store(kind: &StoreKind) -> Result<DatabaseConnection, AppError> {
    let url = store_url(kind)?;
    info!(store = ?kind, "store=connect");

    let mut opt = ConnectOptions::new(url);
    // One actor: a single connection also keeps an in-memory database alive.
    opt.min_connections(1)
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let conn = Database::connect(opt).await?;
    migrate(&conn).await?;

    info!(store = ?kind, "store=ready");
    Ok(conn)
}
