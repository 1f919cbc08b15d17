use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BoardGames::Table)
                    .if_not_exists()
                    .col(pk_auto(BoardGames::Id))
                    .col(string_len(BoardGames::Name, 200))
                    .col(integer(BoardGames::Year))
                    .col(integer(BoardGames::MinPlayers))
                    .col(integer(BoardGames::MaxPlayers))
                    .col(integer(BoardGames::PlayTime))
                    .col(integer(BoardGames::MinAge))
                    .col(integer(BoardGames::UsersRated))
                    .col(double(BoardGames::RatingAverage))
                    .col(integer(BoardGames::BggRank))
                    .col(double(BoardGames::ComplexityAverage))
                    .col(integer(BoardGames::OwnedUsers))
                    .col(timestamp_with_time_zone(BoardGames::CreatedDate))
                    .col(timestamp_with_time_zone(BoardGames::LastModifiedDate))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_board_games_name")
                    .table(BoardGames::Table)
                    .col(BoardGames::Name)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BoardGames::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BoardGames {
    Table,
    Id,
    Name,
    Year,
    MinPlayers,
    MaxPlayers,
    PlayTime,
    MinAge,
    UsersRated,
    RatingAverage,
    BggRank,
    ComplexityAverage,
    OwnedUsers,
    CreatedDate,
    LastModifiedDate,
}
