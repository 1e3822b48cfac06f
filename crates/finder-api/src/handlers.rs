//! Route handler functions.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use finder_dialog::{SkillRequest, SkillResponse};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

/// POST /skill - serve one conversation turn.
pub async fn skill(
    State(state): State<AppState>,
    payload: Result<Json<SkillRequest>, JsonRejection>,
) -> Result<Json<SkillResponse>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "Unreadable request envelope");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(rejection.body_text())
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;

    let application_id = request.application_id();
    if !state.accepts(application_id) {
        warn!(application_id = ?application_id, "Request for another skill rejected");
        return Err(ApiError::Forbidden(
            "request was issued for a different skill".to_string(),
        ));
    }

    debug!(request_id = %request.info().request_id, "Skill request");
    let response = state.skill.handle(request).await;
    Ok(Json(response))
}

/// GET /health - liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
