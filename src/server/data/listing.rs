use sea_orm::{
    sea_query::Order, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, Select,
};
use std::marker::PhantomData;

use crate::server::model::listing::{CatalogResource, ListingRequest, SortColumn};

type Model<R> = <<R as CatalogResource>::Entity as EntityTrait>::Model;

/// Query executor for one catalog resource.
///
/// Builds `SELECT ... WHERE <filter> ORDER BY <column> <order>, <pk> ASC LIMIT n OFFSET m`
/// from a validated request. The sort column always resolves through the resource's
/// descriptor table, so no client string reaches the SQL builder except the filter
/// value, which is bound as a parameter.
pub struct ListingRepository<'a, R: CatalogResource> {
    db: &'a DatabaseConnection,
    resource: PhantomData<R>,
}

impl<'a, R: CatalogResource> ListingRepository<'a, R> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            resource: PhantomData,
        }
    }

    /// Base query with the resource's filter policy applied.
    fn select(filter: Option<&str>) -> Select<R::Entity> {
        let query = R::Entity::find();

        match filter {
            Some(text) => query.filter(R::FILTER_MATCH.condition(R::filter_column(), text)),
            None => query,
        }
    }

    /// Fetches one page together with the pre-window record count.
    ///
    /// Used when pages are not cached. The cached path calls `fetch_page` and `count`
    /// separately so that only the page is stored and the count stays fresh.
    ///
    /// # Returns
    /// - `Ok((Vec<Model>, u64))` - Page of records and number of matching records
    /// - `Err(DbErr)` - Database error during either query
    pub async fn query(
        &self,
        request: &ListingRequest<R::SortColumn>,
    ) -> Result<(Vec<Model<R>>, u64), DbErr> {
        let page = self.fetch_page(request).await?;
        let count = self.count(request.filter_query()).await?;

        Ok((page, count))
    }

    /// Counts the records matching `filter`, ignoring any paging window.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of matching records
    /// - `Err(DbErr)` - Database error during count
    pub async fn count(&self, filter: Option<&str>) -> Result<u64, DbErr> {
        Self::select(filter).count(self.db).await
    }

    /// Fetches one page of records for a validated request.
    ///
    /// Records are ordered by the requested column and direction, with ties broken by
    /// primary key ascending so consecutive pages neither repeat nor skip records. A
    /// window past the end yields an empty vector.
    ///
    /// # Arguments
    /// - `request` - Validated listing request
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)` - At most `page_size` records
    /// - `Err(DbErr)` - Database error during query
    pub async fn fetch_page(
        &self,
        request: &ListingRequest<R::SortColumn>,
    ) -> Result<Vec<Model<R>>, DbErr> {
        Self::select(request.filter_query())
            .order_by(request.sort_column().column(), request.sort_order().into())
            .order_by(R::primary_column(), Order::Asc)
            .offset(request.offset())
            .limit(request.page_size())
            .all(self.db)
            .await
    }
}
