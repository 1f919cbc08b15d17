//! Factory methods for creating test data.
//!
//! Each catalog entity has its own factory module with both a `Factory` struct for
//! customization and a `create_*` convenience function for quick default creation.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let game = factory::board_game::BoardGameFactory::new(&db)
//!     .name("Citadels")
//!     .year(2000)
//!     .build()
//!     .await?;
//!
//! let domain = factory::create_domain(&db).await?;
//! ```

pub mod board_game;
pub mod domain;
pub mod helpers;
pub mod mechanic;

pub use board_game::create_board_game;
pub use domain::create_domain;
pub use helpers::{link_domain, link_mechanic};
pub use mechanic::create_mechanic;
