use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BoardGameDto {
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
    pub created_date: DateTime<Utc>,
    pub last_modified_date: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBoardGameDto {
    pub id: i32,
    pub name: Option<String>,
    pub year: Option<i32>,
}
