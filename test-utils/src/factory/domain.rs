//! Domain factory for creating test domain entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test domains with customizable fields.
pub struct DomainFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> DomainFactory<'a> {
    /// Creates a new DomainFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Domain {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Domain {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the domain entity into the database.
    pub async fn build(self) -> Result<entity::domain::Model, DbErr> {
        let now = Utc::now();

        entity::domain::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a domain with default values.
pub async fn create_domain(db: &DatabaseConnection) -> Result<entity::domain::Model, DbErr> {
    DomainFactory::new(db).build().await
}
