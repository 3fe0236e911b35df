//! Shared database layer for the weathervane service
//!
//! A single `weather` table holds one row per (city, date), enforced by a
//! unique index. Rows are inserted once and never updated or deleted;
//! writers use conflict-ignoring inserts so racing lookups cannot produce
//! duplicate rows.

pub mod migrate;
pub mod types;
pub mod weather;

pub use sqlx::sqlite::SqlitePool;
pub use types::*;
