use crate::server::{data::domain::DomainRepository, model::domain::UpdateDomainParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delete;
