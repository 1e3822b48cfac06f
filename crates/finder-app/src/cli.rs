//! Command-line arguments.
//!
//! Priority resolution: CLI args > env vars > config file > defaults.

use std::path::PathBuf;

use clap::Parser;

use finder_core::config::FinderConfig;

/// College Finder - voice skill endpoint for finding U.S. colleges.
#[derive(Parser, Debug)]
#[command(name = "college-finder", version, about)]
pub struct CliArgs {
    /// Path to the configuration file.
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// HTTP server port.
    #[arg(short = 'p', long = "port")]
    pub port: Option<u16>,

    /// Directory holding the attribute database.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(short = 'l', long = "log-level")]
    pub log_level: Option<String>,
}

impl CliArgs {
    /// Priority: --config flag > FINDER_CONFIG env var > ~/.college-finder/config.toml.
    pub fn resolve_config_path(&self) -> PathBuf {
        self.resolve_config_path_from(|key| std::env::var(key).ok())
    }

    fn resolve_config_path_from<F>(&self, lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(p) = &self.config {
            return p.clone();
        }
        if let Some(p) = lookup("FINDER_CONFIG") {
            return PathBuf::from(p);
        }
        match lookup("HOME") {
            Some(home) => PathBuf::from(home).join(".college-finder").join("config.toml"),
            None => PathBuf::from("config.toml"),
        }
    }

    /// Priority: --port flag > FINDER_PORT env var > config file value.
    pub fn resolve_port(&self, config_port: u16) -> u16 {
        self.resolve_port_from(config_port, |key| std::env::var(key).ok())
    }

    fn resolve_port_from<F>(&self, config_port: u16, lookup: F) -> u16
    where
        F: Fn(&str) -> Option<String>,
    {
        self.port
            .or_else(|| lookup("FINDER_PORT").and_then(|val| val.parse().ok()))
            .unwrap_or(config_port)
    }

    /// Fold the CLI and environment overrides into a loaded config.
    pub fn apply_to(&self, config: &mut FinderConfig) {
        config.apply_env_overrides();
        config.server.port = self.resolve_port(config.server.port);
        if let Some(dir) = &self.data_dir {
            config.general.data_dir = dir.to_string_lossy().to_string();
        }
        if let Some(level) = &self.log_level {
            config.general.log_level = level.clone();
        }
    }
}
