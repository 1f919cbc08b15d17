use axum::http::StatusCode;

use crate::{model::api::ProblemDto, server::error::AppError};

/// Tag for grouping diagnostic endpoints in OpenAPI documentation
pub static ERROR_TAG: &str = "Error";

/// Always fails.
///
/// Exercises the 500 problem response end to end.
#[utoipa::path(
    get,
    path = "/error/test",
    tag = ERROR_TAG,
    responses(
        (status = 500, description = "Internal server error", body = ProblemDto)
    ),
)]
pub async fn error_test() -> Result<StatusCode, AppError> {
    Err(AppError::InternalError(
        "Deliberate failure from /error/test".to_string(),
    ))
}
