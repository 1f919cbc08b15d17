//! Mechanic factory for creating test mechanic entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::factory::helpers::next_id;

/// Factory for creating test mechanics with customizable fields.
pub struct MechanicFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
}

impl<'a> MechanicFactory<'a> {
    /// Creates a new MechanicFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Mechanic {id}"` where id is auto-incremented
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Mechanic {}", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Builds and inserts the mechanic entity into the database.
    pub async fn build(self) -> Result<entity::mechanic::Model, DbErr> {
        let now = Utc::now();

        entity::mechanic::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            created_date: ActiveValue::Set(now),
            last_modified_date: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a mechanic with default values.
pub async fn create_mechanic(db: &DatabaseConnection) -> Result<entity::mechanic::Model, DbErr> {
    MechanicFactory::new(db).build().await
}
