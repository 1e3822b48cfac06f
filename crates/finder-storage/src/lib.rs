//! SQLite persistence for per-user skill attributes.
//!
//! One row per platform user id holds the JSON snapshot of everything that
//! outlives a session: profile, favorites, last results and cursors.

pub mod db;
pub mod migrations;
pub mod repository;

pub use db::Database;
pub use repository::{AttributeRepository, UserRepository};
