//! Inventory record types.
//!
//! This module contains:
//! - The `Produce` record exchanged with clients and held by the store
//! - The default inventory a fresh service starts with

mod types;

pub use types::*;
