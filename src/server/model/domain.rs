//! Domain resource descriptor and write parameters.

use entity::domain::Column;

use crate::{
    model::domain::{DomainDto, UpdateDomainDto},
    server::{
        error::validation::ValidationErrors,
        model::listing::{CatalogResource, SortColumn, TextMatch},
        util::validate::validate_name,
    },
};

/// Domain listing resource.
pub struct Domains;

/// Columns domains may be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainSortColumn {
    Id,
    Name,
}

impl SortColumn for DomainSortColumn {
    type Column = Column;

    const FIELDS: &'static [(&'static str, Self)] = &[("Id", Self::Id), ("Name", Self::Name)];

    fn column(self) -> Column {
        match self {
            Self::Id => Column::Id,
            Self::Name => Column::Name,
        }
    }
}

impl CatalogResource for Domains {
    type Entity = entity::prelude::Domain;
    type SortColumn = DomainSortColumn;
    type Dto = DomainDto;

    const TYPE_NAME: &'static str = "Domain";
    const FILTER_MATCH: TextMatch = TextMatch::Contains;

    fn filter_column() -> Column {
        Column::Name
    }

    fn primary_column() -> Column {
        Column::Id
    }

    fn into_dto(model: entity::domain::Model) -> DomainDto {
        DomainDto {
            id: model.id,
            name: model.name,
            created_date: model.created_date,
            last_modified_date: model.last_modified_date,
        }
    }
}

/// Validated domain update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateDomainParams {
    pub id: i32,
    pub name: Option<String>,
}

impl UpdateDomainParams {
    /// Converts the request DTO; a provided name may only hold letters and spaces.
    pub fn from_dto(dto: UpdateDomainDto) -> Result<Self, ValidationErrors> {
        validate_name(dto.name.as_deref(), true)?;

        Ok(Self {
            id: dto.id,
            name: dto.name,
        })
    }
}
