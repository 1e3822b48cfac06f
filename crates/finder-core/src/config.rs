use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{FinderError, Result};

/// Top-level configuration for the college finder skill.
///
/// Loaded from `~/.college-finder/config.toml` by default. Secrets such as
/// the search API key are usually supplied through the environment instead
/// (see [`FinderConfig::apply_env_overrides`]).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FinderConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub skill: SkillConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl FinderConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: FinderConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| FinderError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Overlay values from `FINDER_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Overlay values from an arbitrary lookup. Empty values are ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(v) = get("FINDER_SKILL_ID") {
            self.skill.skill_id = v;
        }
        if let Some(v) = get("FINDER_API_KEY") {
            self.search.api_key = v;
        }
        if let Some(v) = get("FINDER_MAIN_IMAGE") {
            self.display.main_image = v;
        }
        if let Some(v) = get("FINDER_LIST_IMAGE") {
            self.display.list_image = v;
        }
        if let Some(v) = get("FINDER_GRAD_IMAGE") {
            self.display.grad_image = v;
        }
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory for the SQLite attribute store.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.college-finder/data".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Voice platform settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Application id requests must carry. Empty accepts any caller.
    pub skill_id: String,
    /// Locale used when a request's language has no catalog.
    pub default_locale: String,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            skill_id: String::new(),
            default_locale: "en-US".to_string(),
        }
    }
}

/// College Scorecard search API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    pub base_url: String,
    pub api_key: String,
    /// Upper bound for a single search request.
    pub timeout_secs: u64,
    /// Page size requested from the API. Only the first page is ever read.
    pub per_page: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.data.gov/ed/collegescorecard/v1/schools.json".to_string(),
            api_key: String::new(),
            timeout_secs: 10,
            per_page: crate::types::RECORD_LIMIT,
        }
    }
}

/// Background images for display templates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub main_image: String,
    pub list_image: String,
    pub grad_image: String,
}

/// HTTP endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3030,
            body_limit_bytes: 1024 * 1024,
        }
    }
}
