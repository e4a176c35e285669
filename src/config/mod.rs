//! Configuration for a FakerBot installation.
//!
//! Stored as TOML at `<workspace>/config/config.toml`. The workspace root is
//! `FAKERBOT_HOME` when set, otherwise the OS data directory:
//!   %APPDATA%/FakerBot on Windows
//!   $XDG_DATA_HOME/FakerBot on Linux
//!   ~/Library/Application Support/FakerBot on macOS
//!
//! Every section falls back to defaults, so a missing file or a file with
//! only a token is a valid configuration.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::profiles::{Locale, SynthesisOptions};

/// Root configuration persisted per installation.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Bot API endpoint, credentials and polling cadence.
    #[serde(default)]
    pub telegram: TelegramSettings,
    /// `/history` behaviour.
    #[serde(default)]
    pub history: HistorySettings,
    /// Deadlines for collaborator calls.
    #[serde(default)]
    pub timeouts: TimeoutSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub synthesis: SynthesisOptions,
    /// Locales offered in the `/generate` menu.
    #[serde(default)]
    pub locales: LocaleSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelegramSettings {
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Empty means "take it from the environment".
    #[serde(default)]
    pub bot_token: String,
    /// Long-poll wait passed to `getUpdates`.
    #[serde(default = "default_poll_timeout_secs")]
    pub poll_timeout_secs: u64,
}

impl Default for TelegramSettings {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            bot_token: String::new(),
            poll_timeout_secs: default_poll_timeout_secs(),
        }
    }
}

fn default_api_base() -> String {
    "https://api.telegram.org".into()
}

const fn default_poll_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistorySettings {
    #[serde(default = "default_history_limit")]
    pub default_limit: usize,
}

impl Default for HistorySettings {
    fn default() -> Self {
        Self {
            default_limit: default_history_limit(),
        }
    }
}

const fn default_history_limit() -> usize {
    10
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutSettings {
    #[serde(default = "default_store_timeout_ms")]
    pub store_ms: u64,
    #[serde(default = "default_transport_timeout_ms")]
    pub transport_ms: u64,
}

impl TimeoutSettings {
    pub fn store(&self) -> Duration {
        Duration::from_millis(self.store_ms)
    }

    pub fn transport(&self) -> Duration {
        Duration::from_millis(self.transport_ms)
    }
}

impl Default for TimeoutSettings {
    fn default() -> Self {
        Self {
            store_ms: default_store_timeout_ms(),
            transport_ms: default_transport_timeout_ms(),
        }
    }
}

const fn default_store_timeout_ms() -> u64 {
    5_000
}

const fn default_transport_timeout_ms() -> u64 {
    15_000
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default filter directive; `RUST_LOG` wins when set.
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".into()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LocaleSettings {
    /// Locale codes in menu order.
    #[serde(default = "default_enabled_locales")]
    pub enabled: Vec<String>,
}

impl Default for LocaleSettings {
    fn default() -> Self {
        Self {
            enabled: default_enabled_locales(),
        }
    }
}

fn default_enabled_locales() -> Vec<String> {
    Locale::ALL.iter().map(|l| l.code().to_string()).collect()
}

/// Environment variables consulted, in order, when the config has no token.
pub const TOKEN_ENV_VARS: [&str; 2] = ["FAKERBOT_BOT_TOKEN", "BOT_TOKEN"];

impl AppConfig {
    /// Bot token from the config file, else from the environment.
    pub fn resolved_bot_token(&self) -> Option<String> {
        let configured = self.telegram.bot_token.trim();
        if !configured.is_empty() {
            return Some(configured.to_string());
        }
        TOKEN_ENV_VARS
            .iter()
            .filter_map(|name| env::var(name).ok())
            .map(|value| value.trim().to_string())
            .find(|value| !value.is_empty())
    }
}

pub const CONFIG_FILE_NAME: &str = "config.toml";
pub const HOME_ENV_VAR: &str = "FAKERBOT_HOME";

/// Returns the root directory where FakerBot stores data.
///
/// Order of precedence:
/// 1. `FAKERBOT_HOME` environment variable.
/// 2. OS-specific data directory via `directories::BaseDirs`.
pub fn workspace_root() -> Result<PathBuf> {
    if let Ok(path) = env::var(HOME_ENV_VAR) {
        return Ok(PathBuf::from(path));
    }
    let base_dirs = BaseDirs::new().context("Unable to determine OS data directory")?;
    Ok(base_dirs.data_dir().join("FakerBot"))
}

pub fn config_dir() -> Result<PathBuf> {
    Ok(workspace_root()?.join("config"))
}

pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Loads the configuration from disk or returns defaults.
pub fn load_or_default() -> Result<AppConfig> {
    load_from(&config_file_path()?)
}

pub fn load_from(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file {:?}", path))?;
    let cfg: AppConfig =
        toml::from_str(&data).with_context(|| format!("Failed to parse config file {:?}", path))?;
    Ok(cfg)
}

/// Persists the configuration to disk.
pub fn save(config: &AppConfig) -> Result<()> {
    save_to(&config_file_path()?, config)
}

pub fn save_to(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let data = toml::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("Failed to write config file {:?}", path))?;
    Ok(())
}

/// Ensures the workspace directories exist under the resolved root.
pub fn ensure_workspace_structure() -> Result<WorkspacePaths> {
    let paths = WorkspacePaths::at(workspace_root()?);
    paths.create_all()?;
    Ok(paths)
}

/// Convenience struct exposing important workspace paths.
#[derive(Debug, Clone)]
pub struct WorkspacePaths {
    pub root: PathBuf,
    pub config_dir: PathBuf,
    pub history_dir: PathBuf,
    pub logs_dir: PathBuf,
}

impl WorkspacePaths {
    pub fn at(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        Self {
            config_dir: root.join("config"),
            history_dir: root.join("history"),
            logs_dir: root.join("logs"),
            root,
        }
    }

    pub fn create_all(&self) -> Result<()> {
        for dir in [&self.config_dir, &self.history_dir, &self.logs_dir] {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
        }
        Ok(())
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    pub fn history_file(&self) -> PathBuf {
        self.history_dir.join("profiles.jsonl")
    }
}
