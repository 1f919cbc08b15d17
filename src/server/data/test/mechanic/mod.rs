use crate::server::{data::mechanic::MechanicRepository, model::mechanic::UpdateMechanicParams};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod update;
