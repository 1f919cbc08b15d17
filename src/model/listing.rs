use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::model::api::LinkDto;

/// Raw listing query parameters exactly as the client sent them.
///
/// Every field is optional; defaults and constraints are applied when the
/// parameters are validated into a server-side listing request.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListingParams {
    /// Zero-based page index (default: 0)
    pub page_index: Option<i64>,
    /// Records per page, 1 to 100 (default: 10)
    pub page_size: Option<i64>,
    /// Column to sort by (default: "Name")
    pub sort_column: Option<String>,
    /// "ASC" or "DESC", case-insensitive (default: "ASC")
    pub sort_order: Option<String>,
    /// Optional text matched against the resource's name
    pub filter_query: Option<String>,
}

/// Generic response envelope for listing and single-record endpoints.
///
/// Paging metadata is omitted from the JSON body for non-paged responses.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListingResponse<D> {
    pub links: Vec<LinkDto>,
    pub data: D,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_index: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub record_count: Option<u64>,
}

impl<D> ListingResponse<D> {
    /// Builds a paged response echoing the requested window.
    pub fn paged(data: D, page_index: u64, page_size: u64, record_count: u64, link: LinkDto) -> Self {
        Self {
            links: vec![link],
            data,
            page_index: Some(page_index),
            page_size: Some(page_size),
            record_count: Some(record_count),
        }
    }

    /// Builds a non-paged response carrying a single payload.
    pub fn single(data: D, link: LinkDto) -> Self {
        Self {
            links: vec![link],
            data,
            page_index: None,
            page_size: None,
            record_count: None,
        }
    }
}

/// Identifies a single record, used by delete requests.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct IdParams {
    /// Record ID
    pub id: i32,
}
