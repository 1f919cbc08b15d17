use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait,
};

use crate::server::model::board_game::UpdateBoardGameParams;

pub struct BoardGameRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BoardGameRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a board game by ID.
    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::board_game::Model>, DbErr> {
        entity::prelude::BoardGame::find_by_id(id).one(self.db).await
    }

    /// Updates a board game's name and/or year.
    ///
    /// Fields left as `None` keep their stored value. The last modified date is always
    /// refreshed when the record exists.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated board game
    /// - `Ok(None)` - No board game with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateBoardGameParams,
    ) -> Result<Option<entity::board_game::Model>, DbErr> {
        let Some(game) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active = game.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(year) = params.year {
            active.year = ActiveValue::Set(year);
        }
        active.last_modified_date = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a board game by ID, cascading to its domain and mechanic links.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - The deleted board game
    /// - `Ok(None)` - No board game with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<Option<entity::board_game::Model>, DbErr> {
        let Some(game) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        game.clone().delete(self.db).await?;

        Ok(Some(game))
    }
}
