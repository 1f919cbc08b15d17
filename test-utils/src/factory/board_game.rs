//! Board game factory for creating test board game entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test board games with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let game = BoardGameFactory::new(&db)
///     .name("Terraforming Mars")
///     .year(2016)
///     .players(1, 5)
///     .build()
///     .await?;
/// ```
pub struct BoardGameFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    year: i32,
    min_players: i32,
    max_players: i32,
    play_time: i32,
    min_age: i32,
}

impl<'a> BoardGameFactory<'a> {
    /// Creates a new BoardGameFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Board Game {id}"` where id is auto-incremented
    /// - year: 2000, 2-4 players, 60 minutes, age 10
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Board Game {}", id),
            year: 2000,
            min_players: 2,
            max_players: 4,
            play_time: 60,
            min_age: 10,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn players(mut self, min: i32, max: i32) -> Self {
        self.min_players = min;
        self.max_players = max;
        self
    }

    pub fn play_time(mut self, minutes: i32) -> Self {
        self.play_time = minutes;
        self
    }

    pub fn min_age(mut self, age: i32) -> Self {
        self.min_age = age;
        self
    }

    /// Builds and inserts the board game entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::board_game::Model)` - Created board game entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::board_game::Model, DbErr> {
        let now = Utc::now();

        entity::board_game::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            year: ActiveValue::Set(self.year),
            min_players: ActiveValue::Set(self.min_players),
            max_players: ActiveValue::Set(self.max_players),
            play_time: ActiveValue::Set(self.play_time),
            min_age: ActiveValue::Set(self.min_age),
            users_rated: ActiveValue::Set(0),
            rating_average: ActiveValue::Set(0.0),
            bgg_rank: ActiveValue::Set(0),
            complexity_average: ActiveValue::Set(0.0),
            owned_users: ActiveValue::Set(0),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a board game with default values.
///
/// Shorthand for `BoardGameFactory::new(db).build().await`.
pub async fn create_board_game(
    db: &DatabaseConnection,
) -> Result<entity::board_game::Model, DbErr> {
    BoardGameFactory::new(db).build().await
}
