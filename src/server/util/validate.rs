//! Pure validators for client-supplied listing and write parameters.
//!
//! None of these functions touch shared mutable state; the only shared data they read
//! are the `'static` sortable-column tables, so they are safe to call from any number
//! of concurrent requests.

use crate::server::{
    error::validation::{ValidationError, SORT_COLUMN_FIELD},
    model::listing::{SortColumn, SortOrder, MAX_PAGE_SIZE, MIN_PAGE_SIZE},
};

/// Resolves a client-supplied column name against the sortable fields of `S`.
///
/// Matching is case-sensitive so that every accepted name maps to exactly one column.
///
/// # Returns
/// - `Ok(S)` - The column is declared sortable
/// - `Err(ValidationError)` - Unknown name, reported on the `SortColumn` field
pub fn validate_sort_column<S: SortColumn>(name: &str) -> Result<S, ValidationError> {
    S::from_name(name).ok_or_else(|| {
        ValidationError::new(
            SORT_COLUMN_FIELD,
            format!("{} is not sortable. Sortable columns: {}.", name, S::allowed()),
        )
    })
}

/// Accepts `ASC` or `DESC` in any letter case.
pub fn validate_sort_order(order: &str) -> Result<SortOrder, ValidationError> {
    SortOrder::parse(order).ok_or_else(|| {
        ValidationError::new(
            "SortOrder",
            format!(
                "Value must be one of the following: {}.",
                SortOrder::ALLOWED.join(", ")
            ),
        )
    })
}

pub fn validate_page_index(page_index: i64) -> Result<u64, ValidationError> {
    u64::try_from(page_index).map_err(|_| {
        ValidationError::new(
            "PageIndex",
            "The field PageIndex must be greater than or equal to 0.",
        )
    })
}

pub fn validate_page_size(page_size: i64) -> Result<u64, ValidationError> {
    if (MIN_PAGE_SIZE..=MAX_PAGE_SIZE).contains(&page_size) {
        Ok(page_size as u64)
    } else {
        Err(ValidationError::new(
            "PageSize",
            format!(
                "The field PageSize must be between {} and {}.",
                MIN_PAGE_SIZE, MAX_PAGE_SIZE
            ),
        ))
    }
}

/// Validates an optional new record name.
///
/// A provided name must contain a non-whitespace character; with `letters_only` it may
/// contain nothing but letters and spaces.
pub fn validate_name(name: Option<&str>, letters_only: bool) -> Result<(), ValidationError> {
    let Some(name) = name else {
        return Ok(());
    };

    if name.trim().is_empty() {
        return Err(ValidationError::new("Name", "The field Name must not be blank."));
    }

    if letters_only && !name.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::new(
            "Name",
            "The field Name may only contain letters and spaces.",
        ));
    }

    Ok(())
}
