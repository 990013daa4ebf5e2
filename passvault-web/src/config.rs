//! Server configuration loaded from TOML with environment overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "PASSVAULT_CONFIG";

const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub log: LogConfig,
}

/// `[server]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Worker threads; defaults to the number of CPUs
    pub workers: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            workers: None,
        }
    }
}

/// `[storage]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// Record store file
    pub path: PathBuf,
    /// Serialize all read-modify-write cycles behind one lock
    pub serialize_mutations: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("PasswordDatabase.txt"),
            serialize_mutations: false,
        }
    }
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// `[log]`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directive, overridden by `RUST_LOG`
    pub level: String,
    pub format: LogFormat,
    /// Write daily-rolling log files here instead of stdout
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Text,
            directory: None,
        }
    }
}

impl AppConfig {
    /// Pick the config file: first CLI argument, then `PASSVAULT_CONFIG`, then `config.toml`.
    pub fn resolve_path(
        mut args: impl Iterator<Item = String>,
        env_path: Option<String>,
    ) -> PathBuf {
        args.next()
            .or(env_path)
            .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE), PathBuf::from)
    }

    /// Load from a TOML file. A missing file yields defaults; invalid TOML is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_toml_str(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    /// Apply `PASSVAULT_HOST`, `PASSVAULT_PORT` and `PASSVAULT_STORAGE_PATH`.
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("PASSVAULT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PASSVAULT_PORT") {
            self.server.port = port
                .parse()
                .with_context(|| format!("PASSVAULT_PORT is not a valid port: {port}"))?;
        }
        if let Some(path) = lookup("PASSVAULT_STORAGE_PATH") {
            self.storage.path = PathBuf::from(path);
        }
        Ok(())
    }

    /// Worker count, at least one
    pub fn workers(&self) -> usize {
        self.server.workers.unwrap_or_else(num_cpus::get).max(1)
    }
}
