pub use super::board_game::Entity as BoardGame;
pub use super::board_games_domains::Entity as BoardGamesDomains;
pub use super::board_games_mechanics::Entity as BoardGamesMechanics;
pub use super::domain::Entity as Domain;
pub use super::mechanic::Entity as Mechanic;
