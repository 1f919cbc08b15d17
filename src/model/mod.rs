//! Wire-level DTOs shared by every endpoint.
//!
//! These types describe exactly what travels over HTTP: listing query parameters,
//! the generic listing response envelope, problem documents and the per-resource
//! record shapes.

pub mod api;
pub mod board_game;
pub mod domain;
pub mod listing;
pub mod mechanic;
