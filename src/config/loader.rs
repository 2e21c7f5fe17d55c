//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "DRAGTABLE_CONFIG";

/// Environment variable overriding the page size.
pub const PAGE_SIZE_ENV_VAR: &str = "DRAGTABLE_PAGE_SIZE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },

    /// An environment variable holds a value of the wrong shape.
    #[error("Invalid value '{value}' for {var}")]
    InvalidEnvValue {
        /// Variable name.
        var: &'static str,
        /// Offending value.
        value: String,
    },

    /// A page size of zero was requested.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/dragtable/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Rows per page.
    #[serde(default)]
    pub page_size: Option<usize>,

    /// Number of users generated when no cache is usable.
    #[serde(default)]
    pub record_count: Option<usize>,

    /// Location of the user cache.
    #[serde(default)]
    pub data_file: Option<PathBuf>,

    /// Seed for user generation.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Rows per page.
    pub page_size: usize,
    /// Number of users generated when no cache is usable.
    pub record_count: usize,
    /// Location of the user cache.
    pub data_file: PathBuf,
    /// Seed for user generation.
    pub seed: u64,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            page_size: 5,
            record_count: 500,
            data_file: default_data_path(),
            seed: 42,
            log_file_path: default_log_path(),
        }
    }
}

impl ResolvedConfig {
    /// Reject settings no source may produce.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPageSize` for a zero page size.
    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize);
        }
        Ok(self)
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/dragtable/dragtable.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("dragtable").join("dragtable.log")
    } else {
        PathBuf::from("dragtable.log")
    }
}

/// Resolve default user cache path.
///
/// Returns `~/.local/share/dragtable/users.json` on Unix-like systems,
/// falling back to the current directory.
pub fn default_data_path() -> PathBuf {
    if let Some(data_dir) = dirs::data_dir() {
        data_dir.join("dragtable").join("users.json")
    } else {
        PathBuf::from("users.json")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/dragtable/config.toml` on Unix, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("dragtable").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `DRAGTABLE_CONFIG` environment variable
/// 3. Default path `~/.config/dragtable/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `DRAGTABLE_PAGE_SIZE`: Override page size
///
/// # Errors
///
/// Returns `ConfigError::InvalidEnvValue` if the variable is not a number.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(PAGE_SIZE_ENV_VAR) {
        config.page_size = raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidEnvValue {
                var: PAGE_SIZE_ENV_VAR,
                value: raw.clone(),
            })?;
    }

    Ok(config)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        page_size: config.page_size.unwrap_or(defaults.page_size),
        record_count: config.record_count.unwrap_or(defaults.record_count),
        data_file: config.data_file.unwrap_or(defaults.data_file),
        seed: config.seed.unwrap_or(defaults.seed),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
    }
}

/// CLI flags that override configuration.
///
/// `None` means the flag was not given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    /// `--page-size`
    pub page_size: Option<usize>,
    /// `--records`
    pub record_count: Option<usize>,
    /// `--data`
    pub data_file: Option<PathBuf>,
    /// `--seed`
    pub seed: Option<u64>,
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, cli: CliOverrides) -> ResolvedConfig {
    if let Some(page_size) = cli.page_size {
        config.page_size = page_size;
    }
    if let Some(record_count) = cli.record_count {
        config.record_count = record_count;
    }
    if let Some(data_file) = cli.data_file {
        config.data_file = data_file;
    }
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    config
}

/// Run the full precedence chain and validate the result.
///
/// # Errors
///
/// Returns the first `ConfigError` from loading, env parsing or validation.
pub fn resolve(
    config_path: Option<PathBuf>,
    cli: CliOverrides,
) -> Result<ResolvedConfig, ConfigError> {
    let file = load_config_with_precedence(config_path)?;
    let config = apply_env_overrides(merge_config(file))?;
    apply_cli_overrides(config, cli).validate()
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
