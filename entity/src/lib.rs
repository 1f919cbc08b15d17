//! SeaORM entities for the board game catalog.

pub mod prelude;

pub mod board_game;
pub mod board_games_domains;
pub mod board_games_mechanics;
pub mod domain;
pub mod mechanic;
