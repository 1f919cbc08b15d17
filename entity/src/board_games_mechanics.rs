use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "board_games_mechanics")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub board_game_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub mechanic_id: i32,
    pub created_date: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::board_game::Entity",
        from = "Column::BoardGameId",
        to = "super::board_game::Column::Id",
        on_delete = "Cascade"
    )]
    BoardGame,
    #[sea_orm(
        belongs_to = "super::mechanic::Entity",
        from = "Column::MechanicId",
        to = "super::mechanic::Column::Id",
        on_delete = "Cascade"
    )]
    Mechanic,
}

impl Related<super::board_game::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BoardGame.def()
    }
}

impl Related<super::mechanic::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Mechanic.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
