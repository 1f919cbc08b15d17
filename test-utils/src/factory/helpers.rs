//! Shared helper utilities for factory methods.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Links a board game to a domain through the join table.
pub async fn link_domain(
    db: &DatabaseConnection,
    board_game_id: i32,
    domain_id: i32,
) -> Result<entity::board_games_domains::Model, DbErr> {
    entity::board_games_domains::ActiveModel {
        board_game_id: ActiveValue::Set(board_game_id),
        domain_id: ActiveValue::Set(domain_id),
        created_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}

/// Links a board game to a mechanic through the join table.
pub async fn link_mechanic(
    db: &DatabaseConnection,
    board_game_id: i32,
    mechanic_id: i32,
) -> Result<entity::board_games_mechanics::Model, DbErr> {
    entity::board_games_mechanics::ActiveModel {
        board_game_id: ActiveValue::Set(board_game_id),
        mechanic_id: ActiveValue::Set(mechanic_id),
        created_date: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
