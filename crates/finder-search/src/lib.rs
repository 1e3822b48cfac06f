//! School search: query building and the College Scorecard HTTP client.

pub mod client;
pub mod error;
pub mod query;

pub use client::{parse_response, SchoolSearch, ScorecardClient, SearchOutcome};
pub use error::SearchError;
pub use query::{
    LocationFilter, MajorFilter, Ownership, SchoolSize, ScoreFloor, SearchQuery, SortOrder,
};
