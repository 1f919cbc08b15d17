use super::base_url;
use crate::{
    model::{board_game::UpdateBoardGameDto, listing::ListingParams},
    server::{
        cache::ListingCache,
        error::AppError,
        model::board_game::BoardGames,
        service::{
            board_game::BoardGameService,
            listing::{ListingService, ListingSettings},
        },
    },
};
use entity::prelude::*;
use test_utils::{builder::TestBuilder, factory};

mod delete;
