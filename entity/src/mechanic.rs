use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "mechanics")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub created_date: DateTimeUtc,
    pub last_modified_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::board_games_mechanics::Entity")]
    BoardGamesMechanics,
}

impl Related<super::board_games_mechanics::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardGamesMechanics.def()
    }
}

impl Related<super::board_game::Entity> for Entity {
    fn to() -> RelationDef {
        super::board_games_mechanics::Relation::BoardGame.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::board_games_mechanics::Relation::Mechanic.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
