//! Mechanic resource descriptor and write parameters.

use entity::mechanic::Column;

use crate::{
    model::mechanic::{MechanicDto, UpdateMechanicDto},
    server::{
        error::validation::ValidationErrors,
        model::listing::{CatalogResource, SortColumn, TextMatch},
        util::validate::validate_name,
    },
};

/// Mechanic listing resource.
pub struct Mechanics;

/// Columns mechanics may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MechanicSortColumn {
    Id,
    Name,
}

impl SortColumn for MechanicSortColumn {
    type Column = Column;

    const FIELDS: &'static [(&'static str, Self)] = &[("Id", Self::Id), ("Name", Self::Name)];

    fn column(self) -> Column {
        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
        }
    }
}

impl CatalogResource for Mechanics {
    type Entity = entity::prelude::Mechanic;
    type SortColumn = MechanicSortColumn;
    type Dto = MechanicDto;

    const TYPE_NAME: &'static str = "Mechanic";
    const FILTER_MATCH: TextMatch = TextMatch::Contains;

    fn filter_column() -> Column {
        Column::Name
    }

    fn primary_column() -> Column {
        Column::Id
    }

    fn into_dto(model: entity::mechanic::Model) -> MechanicDto {
        MechanicDto {
            id: model.id,
            name: model.name,
            created_date: model.created_date,
            last_modified_date: model.last_modified_date,
        }
    }
}

/// Validated mechanic update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateMechanicParams {
    pub id: i32,
    pub name: Option<String>,
}

impl UpdateMechanicParams {
    /// Converts the request DTO; a provided name may only hold letters and spaces.
    pub fn from_dto(dto: UpdateMechanicDto) -> Result<Self, ValidationErrors> {
        validate_name(dto.name.as_deref(), true)?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
        })
    }
}
