//! Generic listing request and the static descriptors that drive it.
//!
//! A `ListingRequest<S>` is produced only by validating raw `ListingParams` against the
//! sortable-column table of `S`. Validation never consults the database, and a request
//! is immutable afterwards: the data layer receives a closed set of columns and orders
//! rather than client strings.

use sea_orm::{
    sea_query::{LikeExpr, Order},
    ColumnTrait, Condition, EntityTrait,
};
use serde::{de::DeserializeOwned, Serialize};
use url::Url;

use crate::{
    model::{
        api::LinkDto,
        listing::{ListingParams, ListingResponse},
    },
    server::{
        error::validation::ValidationErrors,
        util::validate::{
            validate_page_index, validate_page_size, validate_sort_column, validate_sort_order,
        },
    },
};

pub const DEFAULT_PAGE_INDEX: i64 = 0;
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MIN_PAGE_SIZE: i64 = 1;
pub const MAX_PAGE_SIZE: i64 = 100;
pub const DEFAULT_SORT_COLUMN: &str = "Name";
pub const DEFAULT_SORT_ORDER: &str = "ASC";

/// Sort direction accepted by listing endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    pub const ALLOWED: [&'static str; 2] = ["ASC", "DESC"];

    /// Parses a direction case-insensitively.
    pub fn parse(value: &str) -> Option<Self> {
        if value.eq_ignore_ascii_case("ASC") {
            Some(Self::Asc)
        } else if value.eq_ignore_ascii_case("DESC") {
            Some(Self::Desc)
        } else {
            None
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<SortOrder> for Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => Order::Asc,
            SortOrder::Desc => Order::Desc,
        }
    }
}

/// How a resource matches `filterQuery` against its designated text column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMatch {
    StartsWith,
    Contains,
}

impl TextMatch {
    /// Builds the filter condition for `column`.
    ///
    /// SQLite `LIKE` is case-insensitive for ASCII, which gives listing endpoints
    /// their case-insensitive match. `%` and `_` in `text` match themselves.
    pub fn condition<C: ColumnTrait>(self, column: C, text: &str) -> Condition {
        Condition::all().add(column.like(LikeExpr::new(self.pattern(text)).escape('\\')))
    }

    fn pattern(self, text: &str) -> String {
        let escaped = escape_like(text);
        match self {
            Self::StartsWith => format!("{}%", escaped),
            Self::Contains => format!("%{}%", escaped),
        }
    }
}

fn escape_like(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Static table of the columns a resource exposes for sorting.
///
/// Implemented by closed enums, one per resource. Names are matched case-sensitively
/// against `FIELDS`; anything else is rejected before a query is built.
pub trait SortColumn: Copy + Eq + std::fmt::Debug + Send + Sync + 'static {
    /// Entity column the descriptor resolves to.
    type Column: ColumnTrait;

    /// Wire name and variant of every sortable field.
    const FIELDS: &'static [(&'static str, Self)];

    fn column(self) -> Self::Column;

    fn from_name(name: &str) -> Option<Self> {
        Self::FIELDS
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, column)| *column)
    }

    fn name(self) -> &'static str {
        Self::FIELDS
            .iter()
            .find(|(_, column)| *column == self)
            .map(|(field, _)| *field)
            .unwrap_or_default()
    }

    /// Comma separated list of sortable names, used in error messages.
    fn allowed() -> String {
        Self::FIELDS
            .iter()
            .map(|(field, _)| *field)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A catalog entity exposed through a listing endpoint.
pub trait CatalogResource: Send + Sync + 'static {
    type Entity: EntityTrait<Model: Sync>;
    type SortColumn: SortColumn<Column = <Self::Entity as EntityTrait>::Column>;
    type Dto: Serialize + DeserializeOwned + Clone + Send + Sync + 'static;

    /// Type name prefixing every cache key of this resource.
    const TYPE_NAME: &'static str;

    /// Filter policy applied to `filter_column()`.
    const FILTER_MATCH: TextMatch;

    fn filter_column() -> <Self::Entity as EntityTrait>::Column;

    /// Primary key column, used as the tie-break for deterministic paging.
    fn primary_column() -> <Self::Entity as EntityTrait>::Column;

    fn into_dto(model: <Self::Entity as EntityTrait>::Model) -> Self::Dto;

    /// Prefix shared by every cache key of this resource.
    fn cache_prefix() -> String {
        format!("{}-", Self::TYPE_NAME)
    }
}

/// Canonical field order used to derive cache keys.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CanonicalRequest<'a> {
    page_index: u64,
    page_size: u64,
    sort_column: &'a str,
    sort_order: &'a str,
    filter_query: Option<&'a str>,
}

/// Validated, immutable listing request for a resource described by `S`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest<S: SortColumn> {
    page_index: u64,
    page_size: u64,
    sort_column: S,
    sort_order: SortOrder,
    filter_query: Option<String>,
}

impl<S: SortColumn> ListingRequest<S> {
    /// Applies defaults and validates raw query parameters.
    ///
    /// Every field is checked so the caller receives all failures at once.
    ///
    /// # Returns
    /// - `Ok(ListingRequest)` - All fields valid
    /// - `Err(ValidationErrors)` - One entry per rejected field
    pub fn from_params(params: ListingParams) -> Result<Self, ValidationErrors> {
        let page_index = validate_page_index(params.page_index.unwrap_or(DEFAULT_PAGE_INDEX));
        let page_size = validate_page_size(params.page_size.unwrap_or(DEFAULT_PAGE_SIZE));
        let sort_column = validate_sort_column::<S>(
            params.sort_column.as_deref().unwrap_or(DEFAULT_SORT_COLUMN),
        );
        let sort_order =
            validate_sort_order(params.sort_order.as_deref().unwrap_or(DEFAULT_SORT_ORDER));

        match (page_index, page_size, sort_column, sort_order) {
            (Ok(page_index), Ok(page_size), Ok(sort_column), Ok(sort_order)) => Ok(Self {
                page_index,
                page_size,
                sort_column,
                sort_order,
                filter_query: params.filter_query.filter(|q| !q.is_empty()),
            }),
            (page_index, page_size, sort_column, sort_order) => Err(ValidationErrors(
                [
                    page_index.err(),
                    page_size.err(),
                    sort_column.err(),
                    sort_order.err(),
                ]
                .into_iter()
                .flatten()
                .collect(),
            )),
        }
    }

    pub fn page_index(&self) -> u64 {
        self.page_index
    }

    pub fn page_size(&self) -> u64 {
        self.page_size
    }

    pub fn sort_column(&self) -> S {
        self.sort_column
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn filter_query(&self) -> Option<&str> {
        self.filter_query.as_deref()
    }

    /// Number of records skipped before the requested page.
    ///
    /// Capped at `i64::MAX`, the largest offset SQLite accepts.
    pub fn offset(&self) -> u64 {
        self.page_index
            .saturating_mul(self.page_size)
            .min(i64::MAX as u64)
    }

    /// Derives the cache key `"<type_name>-<canonical JSON>"`.
    ///
    /// The sort order is normalized to upper case so equivalent requests share a key.
    pub fn cache_key(&self, type_name: &str) -> Result<String, serde_json::Error> {
        let canonical = serde_json::to_string(&CanonicalRequest {
            page_index: self.page_index,
            page_size: self.page_size,
            sort_column: self.sort_column.name(),
            sort_order: self.sort_order.as_str(),
            filter_query: self.filter_query(),
        })?;

        Ok(format!("{}-{}", type_name, canonical))
    }

    /// Rebuilds the request's query string on top of `base`.
    pub fn self_link(&self, base: &Url, method: &str) -> LinkDto {
        let mut href = base.clone();
        {
            let mut query = href.query_pairs_mut();
            query.clear();
            query.append_pair("pageIndex", &self.page_index.to_string());
            query.append_pair("pageSize", &self.page_size.to_string());
            query.append_pair("sortColumn", self.sort_column.name());
            query.append_pair("sortOrder", self.sort_order.as_str());
            if let Some(filter) = self.filter_query() {
                query.append_pair("filterQuery", filter);
            }
        }

        LinkDto::new(href, "self", method)
    }

    /// Wraps a page and its pre-window count in the listing envelope.
    pub fn into_response<D>(self, data: D, record_count: u64, link: LinkDto) -> ListingResponse<D> {
        ListingResponse::paged(data, self.page_index, self.page_size, record_count, link)
    }
}
