pub use sea_orm_migration::prelude::*;

mod m20260302_000001_create_board_games_table;
mod m20260302_000002_create_domains_table;
mod m20260302_000003_create_mechanics_table;
mod m20260302_000004_create_board_games_domains_table;
mod m20260302_000005_create_board_games_mechanics_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260302_000001_create_board_games_table::Migration),
            Box::new(m20260302_000002_create_domains_table::Migration),
            Box::new(m20260302_000003_create_mechanics_table::Migration),
            Box::new(m20260302_000004_create_board_games_domains_table::Migration),
            Box::new(m20260302_000005_create_board_games_mechanics_table::Migration),
        ]
    }
}
