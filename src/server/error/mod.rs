//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into problem documents. The `AppError` enum serves as the
//! top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;
pub mod validation;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use uuid::Uuid;

use crate::{
    model::api::ProblemDto,
    server::error::{config::ConfigError, validation::ValidationErrors},
};

pub const INTERNAL_ERROR_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.1";
pub const UNAVAILABLE_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.6.4";

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Client input errors keep their own response
/// mapping, while infrastructure failures collapse into a generic 5xx problem.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Rejected client input.
    ///
    /// Delegates to `ValidationErrors::into_response()` for the 400/422 mapping.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// A data-source call exceeded the configured query timeout.
    ///
    /// Results in 503 Service Unavailable.
    #[error("Data source did not respond in time")]
    Timeout(#[from] tokio::time::error::Elapsed),

    /// Cached payload could not be encoded or decoded.
    #[error(transparent)]
    SerializationErr(#[from] serde_json::Error),

    /// Link or base URL could not be built.
    #[error(transparent)]
    UrlErr(#[from] url::ParseError),

    /// Socket bind or serve failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Builds a problem document with a fresh trace identifier.
pub fn problem(
    status: StatusCode,
    kind: &str,
    title: &str,
    detail: impl Into<String>,
) -> ProblemDto {
    ProblemDto {
        kind: kind.to_string(),
        title: title.to_string(),
        status: status.as_u16(),
        detail: detail.into(),
        errors: Default::default(),
        trace_id: Uuid::new_v4().to_string(),
    }
}

fn problem_response(status: StatusCode, body: ProblemDto) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/problem+json")],
        Json(body),
    )
        .into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 / 422 - For `Validation`, delegated to `ValidationErrors::into_response()`
/// - 503 Service Unavailable - For `Timeout`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(err) => err.into_response(),
            Self::Timeout(elapsed) => {
                tracing::error!("Data source timeout: {}", elapsed);
                let status = StatusCode::SERVICE_UNAVAILABLE;
                problem_response(
                    status,
                    problem(
                        status,
                        UNAVAILABLE_TYPE,
                        "Service unavailable",
                        "The data source did not respond in time, please retry later.",
                    ),
                )
            }
            Self::InternalError(msg) => {
                InternalServerError(format!("Internal error: {}", msg)).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic problem document to the client to
/// avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        problem_response(
            status,
            problem(
                status,
                INTERNAL_ERROR_TYPE,
                "Internal server error",
                "An unexpected error occurred while processing the request.",
            ),
        )
    }
}
