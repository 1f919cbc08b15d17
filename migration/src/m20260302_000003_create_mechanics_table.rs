use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Mechanics::Table)
                    .if_not_exists()
                    .col(pk_auto(Mechanics::Id))
                    .col(string_len(Mechanics::Name, 200))
                    .col(timestamp_with_time_zone(Mechanics::CreatedDate))
                    .col(timestamp_with_time_zone(Mechanics::LastModifiedDate))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Mechanics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Mechanics {
    Table,
    Id,
    Name,
    CreatedDate,
    LastModifiedDate,
}
