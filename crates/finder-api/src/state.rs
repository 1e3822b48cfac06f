//! Application state shared across route handlers.

use std::sync::Arc;
use std::time::Instant;

use finder_core::config::FinderConfig;
use finder_dialog::Skill;

/// Shared state, cloned into every handler task.
#[derive(Clone)]
pub struct AppState {
    pub skill: Arc<Skill>,
    /// Application id requests must carry. Empty accepts any caller.
    pub skill_id: String,
    /// Largest accepted request body, in bytes.
    pub body_limit_bytes: usize,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(config: &FinderConfig, skill: Skill) -> Self {
        Self {
            skill: Arc::new(skill),
            skill_id: config.skill.skill_id.trim().to_string(),
            body_limit_bytes: config.server.body_limit_bytes,
            start_time: Instant::now(),
        }
    }

    /// Whether a request from `application_id` may be served.
    pub fn accepts(&self, application_id: Option<&str>) -> bool {
        self.skill_id.is_empty() || application_id == Some(self.skill_id.as_str())
    }
}
