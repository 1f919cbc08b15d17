use sea_orm::DatabaseConnection;
use tokio::time::timeout;
use url::Url;

use crate::{
    model::{
        api::LinkDto,
        board_game::{BoardGameDto, UpdateBoardGameDto},
        listing::ListingResponse,
    },
    server::{
        cache::ListingCache,
        data::board_game::BoardGameRepository,
        error::AppError,
        model::{
            board_game::{BoardGames, UpdateBoardGameParams},
            listing::CatalogResource,
        },
        service::listing::{ListingService, ListingSettings},
    },
};

pub struct BoardGameService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
    settings: &'a ListingSettings,
}

impl<'a> BoardGameService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a ListingCache,
        settings: &'a ListingSettings,
    ) -> Self {
        Self {
            db,
            cache,
            settings,
        }
    }

    fn listing(&self) -> ListingService<'a, BoardGames> {
        ListingService::new(self.db, self.cache, self.settings)
    }

    /// Updates a board game's name and/or year, invalidating cached board game pages.
    ///
    /// # Returns
    /// - `Ok(ListingResponse)` - Updated board game, or `None` data for an unknown ID
    /// - `Err(AppError::Validation)` - Blank name
    /// - `Err(AppError::DbErr)` / `Err(AppError::Timeout)` - Data-source failure
    pub async fn update(
        &self,
        payload: UpdateBoardGameDto,
        base: &Url,
    ) -> Result<ListingResponse<Option<BoardGameDto>>, AppError> {
        let params = UpdateBoardGameParams::from_dto(payload)?;
        let repo = BoardGameRepository::new(self.db);

        let updated = timeout(self.settings.query_timeout, repo.update(params)).await??;
        if updated.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            updated.map(BoardGames::into_dto),
            LinkDto::new(base.as_str(), "self", "POST"),
        ))
    }

    /// Deletes a board game, invalidating cached board game pages.
    ///
    /// # Returns
    /// - `Ok(ListingResponse)` - Deleted board game, or `None` data for an unknown ID
    /// - `Err(AppError::DbErr)` / `Err(AppError::Timeout)` - Data-source failure
    pub async fn delete(
        &self,
        id: i32,
        base: &Url,
    ) -> Result<ListingResponse<Option<BoardGameDto>>, AppError> {
        let repo = BoardGameRepository::new(self.db);

        let deleted = timeout(self.settings.query_timeout, repo.delete(id)).await??;
        if deleted.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            deleted.map(BoardGames::into_dto),
            LinkDto::new(base.as_str(), "self", "DELETE"),
        ))
    }
}
