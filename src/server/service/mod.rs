//! Service layer for business logic and orchestration.
//!
//! This module sits between the controller (API) layer and the data (repository) layer.
//! Services are responsible for:
//!
//! - **Validation**: Turning raw request DTOs into validated parameter models
//! - **Caching**: Serving listing pages from the shared cache and invalidating it on writes
//! - **Orchestration**: Bounding every data-source call by the configured timeout
//! - **Assembly**: Building the response envelope returned to the client

pub mod board_game;
pub mod domain;
pub mod listing;
pub mod mechanic;
