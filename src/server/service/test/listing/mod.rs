use super::base_url;
use crate::{
    model::listing::ListingParams,
    server::{
        cache::ListingCache,
        error::AppError,
        model::{board_game::BoardGames, domain::Domains},
        service::listing::{ListingService, ListingSettings},
    },
};
use axum::http::StatusCode;
use entity::prelude::*;
use sea_orm::DatabaseConnection;
use std::time::Duration;
use test_utils::{builder::TestBuilder, factory};

mod list;

fn params(page_index: i64, page_size: i64, sort_column: &str, sort_order: &str) -> ListingParams {
    ListingParams {
        page_index: Some(page_index),
        page_size: Some(page_size),
        sort_column: Some(sort_column.to_string()),
        sort_order: Some(sort_order.to_string()),
        filter_query: None,
    }
}

async fn seed_games(db: &DatabaseConnection) -> Result<(), AppError> {
    for (name, year) in [
        ("Axis & Allies", 1981),
        ("Citadels", 2000),
        ("Terraforming Mars", 2016),
    ] {
        factory::board_game::BoardGameFactory::new(db)
            .name(name)
            .year(year)
            .build()
            .await?;
    }

    Ok(())
}
