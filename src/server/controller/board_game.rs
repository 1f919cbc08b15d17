use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ProblemDto,
        board_game::{BoardGameDto, UpdateBoardGameDto},
        listing::{IdParams, ListingParams, ListingResponse},
    },
    server::{
        controller::{json_rejection, query_rejection, resource_url},
        error::AppError,
        model::board_game::BoardGames,
        service::{board_game::BoardGameService, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping board game endpoints in OpenAPI documentation
pub static BOARD_GAME_TAG: &str = "BoardGames";

pub const BOARD_GAMES_PATH: &str = "/BoardGames";

/// List board games.
///
/// Returns one page of board games, filtered by name, sorted by the requested column,
/// with the total number of matching records. Pages are served from the cache for
/// the configured TTL.
///
/// # Arguments
/// - `state` - Application state containing the database connection and cache
/// - `params` - Paging, sorting and filter parameters
///
/// # Returns
/// - `200 OK` - Requested page with paging metadata
/// - `400 Bad Request` - Invalid page index, page size or sort order
/// - `422 Unprocessable Entity` - Unsupported sort column
/// - `500 Internal Server Error` - Database error
/// - `503 Service Unavailable` - Database did not respond in time
#[utoipa::path(
    get,
    path = "/BoardGames",
    tag = BOARD_GAME_TAG,
    params(ListingParams),
    responses(
        (status = 200, description = "Page of board games", body = ListingResponse<Vec<BoardGameDto>>),
        (status = 400, description = "Invalid listing parameters", body = ProblemDto),
        (status = 422, description = "Unsupported sort column", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto),
        (status = 503, description = "Database did not respond in time", body = ProblemDto)
    ),
)]
pub async fn get_board_games(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let base = resource_url(&state, BOARD_GAMES_PATH)?;

    let page = ListingService::<BoardGames>::new(&state.db, &state.cache, &state.settings)
        .list(params, &base)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Update a board game.
///
/// Changes the name and/or year of an existing board game. Returns `null` data when
/// no board game has the given ID.
///
/// # Returns
/// - `200 OK` - Updated board game, or `null`
/// - `400 Bad Request` - Malformed body or blank name
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/BoardGames",
    tag = BOARD_GAME_TAG,
    request_body = UpdateBoardGameDto,
    responses(
        (status = 200, description = "Updated board game", body = ListingResponse<Option<BoardGameDto>>),
        (status = 400, description = "Invalid update payload", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn update_board_game(
    State(state): State<AppState>,
    payload: Result<Json<UpdateBoardGameDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let base = resource_url(&state, BOARD_GAMES_PATH)?;

    let result = BoardGameService::new(&state.db, &state.cache, &state.settings)
        .update(payload, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Delete a board game.
///
/// Removes the board game and its domain and mechanic links. Returns `null` data
/// when no board game has the given ID.
///
/// # Returns
/// - `200 OK` - Deleted board game, or `null`
/// - `400 Bad Request` - Missing or malformed ID
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/BoardGames",
    tag = BOARD_GAME_TAG,
    params(IdParams),
    responses(
        (status = 200, description = "Deleted board game", body = ListingResponse<Option<BoardGameDto>>),
        (status = 400, description = "Missing or malformed ID", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn delete_board_game(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParams { id }) = params.map_err(query_rejection)?;
    let base = resource_url(&state, BOARD_GAMES_PATH)?;

    let result = BoardGameService::new(&state.db, &state.cache, &state.settings)
        .delete(id, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
