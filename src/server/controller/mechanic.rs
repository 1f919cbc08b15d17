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
        listing::{IdParams, ListingParams, ListingResponse},
        mechanic::{MechanicDto, UpdateMechanicDto},
    },
    server::{
        controller::{json_rejection, query_rejection, resource_url},
        error::AppError,
        model::mechanic::Mechanics,
        service::{listing::ListingService, mechanic::MechanicService},
        state::AppState,
    },
};

/// Tag for grouping mechanic endpoints in OpenAPI documentation
pub static MECHANIC_TAG: &str = "Mechanics";

pub const MECHANICS_PATH: &str = "/Mechanics";

/// List mechanics.
///
/// Returns one page of mechanics, filtered by name and sorted by `Id` or `Name`.
#[utoipa::path(
    get,
    path = "/Mechanics",
    tag = MECHANIC_TAG,
    params(ListingParams),
    responses(
        (status = 200, description = "Page of mechanics", body = ListingResponse<Vec<MechanicDto>>),
        (status = 400, description = "Invalid listing parameters", body = ProblemDto),
        (status = 422, description = "Unsupported sort column", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto),
        (status = 503, description = "Database did not respond in time", body = ProblemDto)
    ),
)]
pub async fn get_mechanics(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let base = resource_url(&state, MECHANICS_PATH)?;

    let page = ListingService::<Mechanics>::new(&state.db, &state.cache, &state.settings)
        .list(params, &base)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Rename a mechanic.
///
/// A provided name may only contain letters and spaces. Returns `null` data when no
/// mechanic has the given ID.
#[utoipa::path(
    post,
    path = "/Mechanics",
    tag = MECHANIC_TAG,
    request_body = UpdateMechanicDto,
    responses(
        (status = 200, description = "Updated mechanic", body = ListingResponse<Option<MechanicDto>>),
        (status = 400, description = "Invalid update payload", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn update_mechanic(
    State(state): State<AppState>,
    payload: Result<Json<UpdateMechanicDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let base = resource_url(&state, MECHANICS_PATH)?;

    let result = MechanicService::new(&state.db, &state.cache, &state.settings)
        .update(payload, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Delete a mechanic.
#[utoipa::path(
    delete,
    path = "/Mechanics",
    tag = MECHANIC_TAG,
    params(IdParams),
    responses(
        (status = 200, description = "Deleted mechanic", body = ListingResponse<Option<MechanicDto>>),
        (status = 400, description = "Missing or malformed ID", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn delete_mechanic(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParams { id }) = params.map_err(query_rejection)?;
    let base = resource_url(&state, MECHANICS_PATH)?;

    let result = MechanicService::new(&state.db, &state.cache, &state.settings)
        .delete(id, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
