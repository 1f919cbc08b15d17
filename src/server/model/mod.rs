//! Server-side domain models and parameter types.
//!
//! This module contains the validated listing request, the static descriptors that
//! tie each catalog resource to its table, sortable columns and filter policy, and
//! the parameter types for write operations. Raw DTOs are validated into these types
//! at the controller boundary and never reach the data layer unchecked.

pub mod board_game;
pub mod domain;
pub mod listing;
pub mod mechanic;
