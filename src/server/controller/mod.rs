//! HTTP request handlers for the catalog endpoints.
//!
//! Controllers extract query strings and JSON bodies, hand them to the service layer,
//! and wrap the result in a JSON response. Extractor rejections are converted into
//! validation problems so malformed input gets the same response shape as any other
//! rejected field.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use url::Url;

use crate::server::{
    error::{
        validation::{ValidationError, ValidationErrors},
        AppError,
    },
    state::AppState,
};

pub mod board_game;
pub mod domain;
pub mod error;
pub mod mechanic;

#[cfg(test)]
mod test;

/// Maps an unparsable query string to a 400 validation problem.
pub(crate) fn query_rejection(rejection: QueryRejection) -> ValidationErrors {
    ValidationError::new("Query", rejection.body_text()).into()
}

/// Maps an unparsable or missing JSON body to a 400 validation problem.
pub(crate) fn json_rejection(rejection: JsonRejection) -> ValidationErrors {
    ValidationError::new("Body", rejection.body_text()).into()
}

/// Absolute URL of a resource endpoint, used as the base of self links.
pub(crate) fn resource_url(state: &AppState, path: &str) -> Result<Url, AppError> {
    Ok(state.app_url.join(path.trim_start_matches('/'))?)
}
