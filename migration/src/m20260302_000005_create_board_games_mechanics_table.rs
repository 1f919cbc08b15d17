use sea_orm_migration::{prelude::*, schema::*};

use super::m20260302_000001_create_board_games_table::BoardGames;
use super::m20260302_000003_create_mechanics_table::Mechanics;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardGamesMechanics::Table)
                    .if_not_exists()
                    .col(integer(BoardGamesMechanics::BoardGameId))
                    .col(integer(BoardGamesMechanics::MechanicId))
                    .col(timestamp_with_time_zone(BoardGamesMechanics::CreatedDate))
                    .primary_key(
                        Index::create()
                            .col(BoardGamesMechanics::BoardGameId)
                            .col(BoardGamesMechanics::MechanicId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_games_mechanics_board_game_id")
                            .from(BoardGamesMechanics::Table, BoardGamesMechanics::BoardGameId)
                            .to(BoardGames::Table, BoardGames::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_board_games_mechanics_mechanic_id")
                            .from(BoardGamesMechanics::Table, BoardGamesMechanics::MechanicId)
                            .to(Mechanics::Table, Mechanics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardGamesMechanics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardGamesMechanics {
    Table,
    BoardGameId,
    MechanicId,
    CreatedDate,
}
