//! College Finder binary - composition root.
//!
//! 1. Parse CLI arguments and load configuration from TOML
//! 2. Open the SQLite attribute store
//! 3. Build the search client and the skill
//! 4. Serve the skill endpoint

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;

use finder_api::routes;
use finder_api::state::AppState;
use finder_core::config::FinderConfig;
use finder_dialog::Skill;
use finder_search::ScorecardClient;
use finder_storage::{Database, UserRepository};

use crate::cli::CliArgs;

/// Expand a leading `~/` to the user's home directory.
fn resolve_data_dir(data_dir: &str) -> PathBuf {
    match data_dir.strip_prefix("~/") {
        Some(rest) => {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(rest)
        }
        None => PathBuf::from(data_dir),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = CliArgs::parse();

    let config_file = args.resolve_config_path();
    let config_found = config_file.exists();
    let mut config = FinderConfig::load_or_default(&config_file);
    args.apply_to(&mut config);

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.general.log_level)),
        )
        .init();

    tracing::info!("Starting College Finder v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!(path = %config_file.display(), found = config_found, "Configuration loaded");
    if config.search.api_key.is_empty() {
        tracing::warn!("No search API key configured; searches will be rejected upstream");
    }

    // Storage.
    let data_dir = resolve_data_dir(&config.general.data_dir);
    if let Err(e) = std::fs::create_dir_all(&data_dir) {
        tracing::error!(path = %data_dir.display(), error = %e, "Failed to create data directory");
        return Err(e.into());
    }
    let db_path = data_dir.join("college-finder.db");
    let db = Database::new(&db_path)?;
    tracing::info!(path = %db_path.display(), "SQLite database opened");
    let repository = Arc::new(UserRepository::new(Arc::new(db)));

    // Skill.
    let search = Arc::new(ScorecardClient::new(&config.search));
    let skill = Skill::new(&config, search, repository);
    let state = AppState::new(&config, skill);

    // Server.
    let addr = format!("{}:{}", config.server.host, config.server.port);
    if let Err(e) = routes::start_server(&addr, state).await {
        tracing::error!(addr = %addr, error = %e, "Skill endpoint stopped");
        return Err(e.into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_absolute_data_dir() {
        assert_eq!(resolve_data_dir("/srv/finder"), PathBuf::from("/srv/finder"));
    }

    #[test]
    fn test_resolve_home_data_dir() {
        let resolved = resolve_data_dir("~/.college-finder/data");
        assert!(resolved.ends_with(".college-finder/data"));
        assert!(!resolved.starts_with("~"));
    }
}
