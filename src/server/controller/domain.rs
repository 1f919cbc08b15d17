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
        domain::{DomainDto, UpdateDomainDto},
        listing::{IdParams, ListingParams, ListingResponse},
    },
    server::{
        controller::{json_rejection, query_rejection, resource_url},
        error::AppError,
        model::domain::Domains,
        service::{domain::DomainService, listing::ListingService},
        state::AppState,
    },
};

/// Tag for grouping domain endpoints in OpenAPI documentation
pub static DOMAIN_TAG: &str = "Domains";

pub const DOMAINS_PATH: &str = "/Domains";

/// List domains.
///
/// Returns one page of domains, filtered by name and sorted by `Id` or `Name`.
#[utoipa::path(
    get,
    path = "/Domains",
    tag = DOMAIN_TAG,
    params(ListingParams),
    responses(
        (status = 200, description = "Page of domains", body = ListingResponse<Vec<DomainDto>>),
        (status = 400, description = "Invalid listing parameters", body = ProblemDto),
        (status = 422, description = "Unsupported sort column", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto),
        (status = 503, description = "Database did not respond in time", body = ProblemDto)
    ),
)]
pub async fn get_domains(
    State(state): State<AppState>,
    params: Result<Query<ListingParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(params) = params.map_err(query_rejection)?;
    let base = resource_url(&state, DOMAINS_PATH)?;

    let page = ListingService::<Domains>::new(&state.db, &state.cache, &state.settings)
        .list(params, &base)
        .await?;

    Ok((StatusCode::OK, Json(page)))
}

/// Rename a domain.
///
/// A provided name may only contain letters and spaces. Returns `null` data when no
/// domain has the given ID.
#[utoipa::path(
    post,
    path = "/Domains",
    tag = DOMAIN_TAG,
    request_body = UpdateDomainDto,
    responses(
        (status = 200, description = "Updated domain", body = ListingResponse<Option<DomainDto>>),
        (status = 400, description = "Invalid update payload", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn update_domain(
    State(state): State<AppState>,
    payload: Result<Json<UpdateDomainDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) = payload.map_err(json_rejection)?;
    let base = resource_url(&state, DOMAINS_PATH)?;

    let result = DomainService::new(&state.db, &state.cache, &state.settings)
        .update(payload, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Delete a domain.
#[utoipa::path(
    delete,
    path = "/Domains",
    tag = DOMAIN_TAG,
    params(IdParams),
    responses(
        (status = 200, description = "Deleted domain", body = ListingResponse<Option<DomainDto>>),
        (status = 400, description = "Missing or malformed ID", body = ProblemDto),
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn delete_domain(
    State(state): State<AppState>,
    params: Result<Query<IdParams>, QueryRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Query(IdParams { id }) = params.map_err(query_rejection)?;
    let base = resource_url(&state, DOMAINS_PATH)?;

    let result = DomainService::new(&state.db, &state.cache, &state.settings)
        .delete(id, &base)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}
