//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds all shared resources and
//! dependencies needed by the application. The state is initialized once during startup
//! and then cloned for each request handler through Axum's state extraction.
//!
//! The state includes:
//! - Database connection pool for data persistence
//! - Listing page cache shared by every resource
//! - Cache and query timeout settings
//! - Application URL for generating links

use sea_orm::DatabaseConnection;
use std::sync::Arc;
use url::Url;

use crate::server::{cache::ListingCache, service::listing::ListingSettings};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `Arc<ListingCache>` is a reference-counted pointer
/// - `ListingSettings` is `Copy`
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Cache of materialized listing pages.
    ///
    /// Shared across requests so concurrent identical requests coalesce into one
    /// query and repeated requests within the TTL skip the database.
    pub cache: Arc<ListingCache>,

    /// Cache TTL and data-source timeout applied by every service.
    pub settings: ListingSettings,

    /// Application base URL for generating self links.
    pub app_url: Url,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `cache` - Shared listing cache
    /// - `settings` - Cache TTL and query timeout
    /// - `app_url` - Application base URL, ending with `/`
    pub fn new(
        db: DatabaseConnection,
        cache: Arc<ListingCache>,
        settings: ListingSettings,
        app_url: Url,
    ) -> Self {
        Self {
            db,
            cache,
            settings,
            app_url,
        }
    }
}
