use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "board_games")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub year: i32,
    pub min_players: i32,
    pub max_players: i32,
    pub play_time: i32,
    pub min_age: i32,
    pub users_rated: i32,
    pub rating_average: f64,
    pub bgg_rank: i32,
    pub complexity_average: f64,
    pub owned_users: i32,
    pub created_date: DateTimeUtc,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board_games_domains::Entity")]
    BoardGamesDomains,
    #[sea_orm(has_many = "super::board_games_mechanics::Entity")]
    BoardGamesMechanics,
}

impl Related<super::board_games_domains::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardGamesDomains.def()
    }
}

impl Related<super::board_games_mechanics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardGamesMechanics.def()
    }
}

impl Related<super::domain::Entity> for Entity {
    fn to() -> RelationDef {
        super::board_games_domains::Relation::Domain.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::board_games_domains::Relation::BoardGame.def().rev())
    }
}

impl Related<super::mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        super::board_games_mechanics::Relation::Mechanic.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::board_games_mechanics::Relation::BoardGame.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
