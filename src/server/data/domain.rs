use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, IntoActiveModel,
    ModelTrait,
};

use crate::server::model::domain::UpdateDomainParams;

pub struct DomainRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DomainRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<entity::domain::Model>, DbErr> {
        entity::prelude::Domain::find_by_id(id).one(self.db).await
    }

    /// Renames a domain, refreshing its last modified date.
    ///
    /// # Returns
    /// - `Ok(Some(Model))` - Updated domain
    /// - `Ok(None)` - No domain with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        params: UpdateDomainParams,
    ) -> Result<Option<entity::domain::Model>, DbErr> {
        let Some(model) = self.find_by_id(params.id).await? else {
            return Ok(None);
        };

        let mut active = model.into_active_model();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        active.last_modified_date = ActiveValue::Set(Utc::now());

        Ok(Some(active.update(self.db).await?))
    }

    /// Deletes a domain by ID along with its board game links.
    pub async fn delete(&self, id: i32) -> Result<Option<entity::domain::Model>, DbErr> {
        let Some(model) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        model.clone().delete(self.db).await?;

        Ok(Some(model))
    }
}
