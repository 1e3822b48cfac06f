//! HTTP front for the college finder skill.
//!
//! The voice platform POSTs request envelopes to `/skill` and receives the
//! response envelope back; `/health` reports liveness.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
