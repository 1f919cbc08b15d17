//! Board game resource descriptor and write parameters.

use entity::board_game::Column;

use crate::{
    model::board_game::{BoardGameDto, UpdateBoardGameDto},
    server::{
        error::validation::ValidationErrors,
        model::listing::{CatalogResource, SortColumn, TextMatch},
        util::validate::validate_name,
    },
};

/// Board game listing resource.
pub struct BoardGames;

/// Columns board games may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardGameSortColumn {
    Id,
    Name,
    Year,
    MinPlayers,
    MaxPlayers,
    PlayTime,
    MinAge,
}

impl SortColumn for BoardGameSortColumn {
    type Column = Column;

    const FIELDS: &'static [(&'static str, Self)] = &[
        ("Id", Self::Id),
        ("Name", Self::Name),
        ("Year", Self::Year),
        ("MinPlayers", Self::MinPlayers),
        ("MaxPlayers", Self::MaxPlayers),
        ("PlayTime", Self::PlayTime),
        ("MinAge", Self::MinAge),
    ];

    fn column(self) -> Column {
        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
            Self::Year => Column::Year,
            Self::MinPlayers => Column::MinPlayers,
            Self::MaxPlayers => Column::MaxPlayers,
            Self::PlayTime => Column::PlayTime,
            Self::MinAge => Column::MinAge,
        }
    }
}

impl CatalogResource for BoardGames {
    type Entity = entity::prelude::BoardGame;
    type SortColumn = BoardGameSortColumn;
    type Dto = BoardGameDto;

    const TYPE_NAME: &'static str = "BoardGame";
    const FILTER_MATCH: TextMatch = TextMatch::Contains;

    fn filter_column() -> Column {
        Column::Name
    }

    fn primary_column() -> Column {
        Column::Id
    }

    fn into_dto(model: entity::board_game::Model) -> BoardGameDto {
        BoardGameDto {
            id: model.id,
            name: model.name,
            year: model.year,
            min_players: model.min_players,
            max_players: model.max_players,
            play_time: model.play_time,
            min_age: model.min_age,
            users_rated: model.users_rated,
            rating_average: model.rating_average,
            bgg_rank: model.bgg_rank,
            complexity_average: model.complexity_average,
            owned_users: model.owned_users,
            created_date: model.created_date,
            last_modified_date: model.last_modified_date,
        }
    }
}

/// Validated board game update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateBoardGameParams {
    pub id: i32,
    pub name: Option<String>,
    pub year: Option<i32>,
}

impl UpdateBoardGameParams {
    /// Converts the request DTO, rejecting a blank name.
    ///
    /// Board game names keep punctuation ("Axis & Allies"), so only blankness is checked.
    pub fn from_dto(dto: UpdateBoardGameDto) -> Result<Self, ValidationErrors> {
        validate_name(dto.name.as_deref(), false)?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
            year: dto.year,
        })
    }
}
