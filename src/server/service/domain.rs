use sea_orm::DatabaseConnection;
use tokio::time::timeout;
use url::Url;

use crate::{
    model::{
        api::LinkDto,
        domain::{DomainDto, UpdateDomainDto},
        listing::ListingResponse,
    },
    server::{
        cache::ListingCache,
        data::domain::DomainRepository,
        error::AppError,
        model::{
            domain::{Domains, UpdateDomainParams},
            listing::CatalogResource,
        },
        service::listing::{ListingService, ListingSettings},
    },
};

pub struct DomainService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
    settings: &'a ListingSettings,
}

impl<'a> DomainService<'a> {
    pub fn new(
        db: &'a DatabaseConnection,
        cache: &'a ListingCache,
        settings: &'a ListingSettings,
    ) -> Self {
        Self {
            db,
            cache,
            settings,
        }
    }

    fn listing(&self) -> ListingService<'a, Domains> {
        ListingService::new(self.db, self.cache, self.settings)
    }

    /// Renames a domain, invalidating cached domain pages.
    pub async fn update(
        &self,
        payload: UpdateDomainDto,
        base: &Url,
    ) -> Result<ListingResponse<Option<DomainDto>>, AppError> {
        let params = UpdateDomainParams::from_dto(payload)?;
        let repo = DomainRepository::new(self.db);

        let updated = timeout(self.settings.query_timeout, repo.update(params)).await??;
        if updated.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            updated.map(Domains::into_dto),
            LinkDto::new(base.as_str(), "self", "POST"),
        ))
    }

    /// Deletes a domain, invalidating cached domain pages.
    pub async fn delete(
        &self,
        id: i32,
        base: &Url,
    ) -> Result<ListingResponse<Option<DomainDto>>, AppError> {
        let repo = DomainRepository::new(self.db);

        let deleted = timeout(self.settings.query_timeout, repo.delete(id)).await??;
        if deleted.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            deleted.map(Domains::into_dto),
            LinkDto::new(base.as_str(), "self", "DELETE"),
        ))
    }
}
