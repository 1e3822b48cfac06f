//! Shared configuration, errors and domain types for the college finder skill.

pub mod config;
pub mod error;
pub mod geo;
pub mod types;

pub use config::FinderConfig;
pub use error::{FinderError, Result};
