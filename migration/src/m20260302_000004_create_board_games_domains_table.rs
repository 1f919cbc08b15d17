use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000001_create_board_games_table::BoardGames;
use super::m20260302_000002_create_domains_table::Domains;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardGamesDomains::Table)
                    .if_not_exists()
                    .col(integer(BoardGamesDomains::BoardGameId))
                    .col(integer(BoardGamesDomains::DomainId))
                    .col(timestamp_with_time_zone(BoardGamesDomains::CreatedDate))
                    .primary_key(
                        Index::create()
                            .col(BoardGamesDomains::BoardGameId)
                            .col(BoardGamesDomains::DomainId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_games_domains_board_game_id")
                            .from(BoardGamesDomains::Table, BoardGamesDomains::BoardGameId)
                            .to(BoardGames::Table, BoardGames::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_games_domains_domain_id")
                            .from(BoardGamesDomains::Table, BoardGamesDomains::DomainId)
                            .to(Domains::Table, Domains::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardGamesDomains::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardGamesDomains {
    Table,
    BoardGameId,
    DomainId,
    CreatedDate,
}
