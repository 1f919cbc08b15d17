use sea_orm::DatabaseConnection;
use tokio::time::timeout;
use url::Url;

use crate::{
    model::{
        api::LinkDto,
        listing::ListingResponse,
        mechanic::{MechanicDto, UpdateMechanicDto},
    },
    server::{
        cache::ListingCache,
        data::mechanic::MechanicRepository,
        error::AppError,
        model::{
            listing::CatalogResource,
            mechanic::{Mechanics, UpdateMechanicParams},
        },
        service::listing::{ListingService, ListingSettings},
    },
};

pub struct MechanicService<'a> {
    db: &'a DatabaseConnection,
    cache: &'a ListingCache,
    settings: &'a ListingSettings,
}

impl<'a> MechanicService<'a> {
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

    fn listing(&self) -> ListingService<'a, Mechanics> {
        ListingService::new(self.db, self.cache, self.settings)
    }

    /// Renames a mechanic, invalidating cached mechanic pages.
    pub async fn update(
        &self,
        payload: UpdateMechanicDto,
        base: &Url,
    ) -> Result<ListingResponse<Option<MechanicDto>>, AppError> {
        let params = UpdateMechanicParams::from_dto(payload)?;
        let repo = MechanicRepository::new(self.db);

        let updated = timeout(self.settings.query_timeout, repo.update(params)).await??;
        if updated.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            updated.map(Mechanics::into_dto),
            LinkDto::new(base.as_str(), "self", "POST"),
        ))
    }

    /// Deletes a mechanic, invalidating cached mechanic pages.
    pub async fn delete(
        &self,
        id: i32,
        base: &Url,
    ) -> Result<ListingResponse<Option<MechanicDto>>, AppError> {
        let repo = MechanicRepository::new(self.db);

        let deleted = timeout(self.settings.query_timeout, repo.delete(id)).await??;
        if deleted.is_some() {
            self.listing().invalidate();
        }

        Ok(ListingResponse::single(
            deleted.map(Mechanics::into_dto),
            LinkDto::new(base.as_str(), "self", "DELETE"),
        ))
    }
}
