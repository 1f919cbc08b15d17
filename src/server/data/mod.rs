//! Database repository layer for the catalog entities.
//!
//! `ListingRepository` runs the filtered, ordered and windowed queries behind every
//! listing endpoint, generic over the resource descriptor. The per-entity repositories
//! handle the update and delete operations. All repositories use SeaORM entity models
//! internally and never see unvalidated client input.

pub mod board_game;
pub mod domain;
pub mod listing;
pub mod mechanic;

#[cfg(test)]
mod test;
