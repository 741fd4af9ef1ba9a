//! SeaORM adapter for the key-value record table.

use sea_orm::sea_query::OnConflict;
use sea_orm::{ConnectionTrait, EntityTrait, Set};
use time::OffsetDateTime;

use crate::entities::kv_records;

// Adapter functions return DbErr; repos map to DomainError via map_db_err.

pub async fn find_by_key<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &str,
) -> Result<Option<kv_records::Model>, sea_orm::DbErr> {
    kv_records::Entity::find_by_id(key.to_owned()).one(conn).await
}

/// Insert or replace the value stored under `key`.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &str,
    value: String,
) -> Result<(), sea_orm::DbErr> {
    let active = kv_records::ActiveModel {
        key: Set(key.to_owned()),
        value: Set(value),
        updated_at: Set(OffsetDateTime::now_utc()),
    };

    kv_records::Entity::insert(active)
        .on_conflict(
            OnConflict::column(kv_records::Column::Key)
                .update_columns([kv_records::Column::Value, kv_records::Column::UpdatedAt])
                .to_owned(),
        )
        .exec_without_returning(conn)
        .await?;
    Ok(())
}

/// Returns the number of rows removed (0 or 1).
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    key: &str,
) -> Result<u64, sea_orm::DbErr> {
    let res = kv_records::Entity::delete_by_id(key.to_owned())
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
