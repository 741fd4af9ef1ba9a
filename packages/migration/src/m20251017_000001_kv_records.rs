use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(Iden)]
enum KvRecords {
    Table,
    Key,
    Value,
    UpdatedAt,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // kv_records: one row per persisted record (last game, setup selection)
        manager
            .create_table(
                Table::create()
                    .table(KvRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(KvRecords::Key)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(KvRecords::Value).text().not_null())
                    .col(
                        ColumnDef::new(KvRecords::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(KvRecords::Table).if_exists().to_owned())
            .await
    }
}
