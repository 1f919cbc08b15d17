use sea_orm::DatabaseConnection;
use std::{marker::PhantomData, time::Duration};
use tokio::time::timeout;
use url::Url;

use crate::{
    model::listing::{ListingParams, ListingResponse},
    server::{
        cache::ListingCache,
        data::listing::ListingRepository,
        error::AppError,
        model::listing::{CatalogResource, ListingRequest},
    },
};

pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30);
pub const DEFAULT_QUERY_TIMEOUT: Duration = Duration::from_secs(5);

/// Tunables shared by every listing and write service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListingSettings {
    /// Lifetime of a cached page.
    pub cache_ttl: Duration,
    /// Upper bound on any single data-source call.
    pub query_timeout: Duration,
}

impl Default for ListingSettings {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            query_timeout: DEFAULT_QUERY_TIMEOUT,
        }
    }
}

/// Paginated, filtered and sorted listing for one catalog resource.
pub struct ListingService<'a, R: CatalogResource> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
    settings: &'a ListingSettings,
    resource: PhantomData<R>,
}

impl<'a, R: CatalogResource> ListingService<'a, R> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a ListingCache,
        settings: &'a ListingSettings,
    ) -> Self {
        Self {
            db,
            cache,
            settings,
            resource: PhantomData,
        }
    }

    /// Lists one page of the resource.
    ///
    /// The page's data is served from the cache when a live entry exists for the
    /// canonical request key; otherwise it is fetched, cached and returned. The record
    /// count is always fetched fresh, so after an out-of-band write `data` may lag
    /// behind `record_count` until the cached page expires. A zero cache TTL bypasses
    /// the cache entirely.
    ///
    /// # Arguments
    /// - `params` - Raw query parameters from the client
    /// - `base` - URL the self link is built on
    ///
    /// # Returns
    /// - `Ok(ListingResponse)` - Requested page with paging metadata
    /// - `Err(AppError::Validation)` - Rejected parameters, no query was issued
    /// - `Err(AppError::DbErr)` - Data-source failure
    /// - `Err(AppError::Timeout)` - Data-source call exceeded the query timeout
    pub async fn list(
        &self,
        params: ListingParams,
        base: &Url,
    ) -> Result<ListingResponse<Vec<R::Dto>>, AppError> {
        let request = ListingRequest::<R::SortColumn>::from_params(params)?;
        let key = request.cache_key(R::TYPE_NAME)?;

        let repo = ListingRepository::<R>::new(self.db);
        let query_timeout = self.settings.query_timeout;
        let link = request.self_link(base, "GET");

        if self.settings.cache_ttl.is_zero() {
            let (models, record_count) = timeout(query_timeout, repo.query(&request)).await??;
            let data: Vec<R::Dto> = models.into_iter().map(R::into_dto).collect();
            return Ok(request.into_response(data, record_count, link));
        }

        let data: Vec<R::Dto> = {
            let repo = &repo;
            let request = &request;
            self.cache
                .get_or_try_compute(&key, self.settings.cache_ttl, move || async move {
                    let models = timeout(query_timeout, repo.fetch_page(request)).await??;
                    Ok::<_, AppError>(models.into_iter().map(R::into_dto).collect())
                })
                .await?
        };

        let record_count = timeout(query_timeout, repo.count(request.filter_query())).await??;

        Ok(request.into_response(data, record_count, link))
    }

    /// Drops every cached page of the resource.
    pub fn invalidate(&self) -> usize {
        self.cache.invalidate_prefix(&R::cache_prefix())
    }
}
