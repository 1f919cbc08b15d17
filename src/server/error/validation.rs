use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::collections::BTreeMap;
use thiserror::Error;

use crate::server::error::problem;

pub const BAD_REQUEST_TYPE: &str = "https://tools.ietf.org/html/rfc7231#section-6.5.1";
pub const UNPROCESSABLE_TYPE: &str = "https://tools.ietf.org/html/rfc4918#section-11.2";

/// Field name reported for an unsupported sort column.
pub const SORT_COLUMN_FIELD: &str = "SortColumn";

/// A single rejected client input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Request field that failed, e.g. `SortColumn`
    pub field: &'static str,
    /// Human-readable reason
    pub message: String,
}

impl ValidationError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every validation failure collected for one request.
///
/// Rendered as a `422 Unprocessable Entity` problem when any failure concerns the
/// sort column, and as `400 Bad Request` otherwise.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", self.detail())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }

    /// Returns true when a failure was reported for `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.0.iter().any(|e| e.field == field)
    }

    pub fn status(&self) -> StatusCode {
        if self.has_field(SORT_COLUMN_FIELD) {
            StatusCode::UNPROCESSABLE_ENTITY
        } else {
            StatusCode::BAD_REQUEST
        }
    }

    fn detail(&self) -> String {
        self.0
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(err: ValidationError) -> Self {
        Self(vec![err])
    }
}

/// Converts validation failures into a problem document.
///
/// All validation problems share the same shape and differ only in `type`, `status`,
/// `detail` and the `errors` map naming the failed fields.
impl IntoResponse for ValidationErrors {
    fn into_response(self) -> Response {
        let status = self.status();
        let kind = if status == StatusCode::UNPROCESSABLE_ENTITY {
            UNPROCESSABLE_TYPE
        } else {
            BAD_REQUEST_TYPE
        };

        let mut errors: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for err in &self.0 {
            errors
                .entry(err.field.to_string())
                .or_default()
                .push(err.message.clone());
        }

        let mut body = problem(
            status,
            kind,
            "One or more validation errors occurred.",
            self.detail(),
        );
        body.errors = errors;

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(body),
        )
            .into_response()
    }
}
