//! Configuration file loading with precedence handling.

use super::WindowConfig;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "TUIWIN_CONFIG";

/// Environment variable overriding the fallback console height.
pub const CONSOLE_HEIGHT_ENV: &str = "TUIWIN_CONSOLE_HEIGHT";

/// Environment variable overriding `auto_activate`.
pub const AUTO_ACTIVATE_ENV: &str = "TUIWIN_AUTO_ACTIVATE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (permission issues, not a file, ...).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML or unknown keys.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/tuiwin/config.toml`:
///
/// ```toml
/// auto_activate = false
/// fallback_console_height = 24
/// fallback_console_width = 80
/// log_file_path = "/tmp/tuiwin.log"
///
/// [limits]
/// Title = 2
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Make added elements visible.
    #[serde(default)]
    pub auto_activate: Option<bool>,

    /// Height assumed when the console reports none.
    #[serde(default)]
    pub fallback_console_height: Option<u16>,

    /// Width assumed when the console reports none.
    #[serde(default)]
    pub fallback_console_width: Option<u16>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Per-kind instance caps keyed by short type name.
    #[serde(default)]
    pub limits: Option<HashMap<String, usize>>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars and explicit overrides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Make added elements visible.
    pub auto_activate: bool,
    /// Height assumed when the console reports none.
    pub fallback_console_height: u16,
    /// Width assumed when the console reports none.
    pub fallback_console_width: u16,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Per-kind instance caps.
    pub limits: HashMap<String, usize>,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        let window = WindowConfig::default();
        Self {
            auto_activate: window.auto_activate,
            fallback_console_height: window.fallback_console_height,
            fallback_console_width: window.fallback_console_width,
            log_file_path: default_log_path(),
            limits: window.limits,
        }
    }
}

impl ResolvedConfig {
    /// The part of the configuration a window consults.
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig {
            auto_activate: self.auto_activate,
            fallback_console_height: self.fallback_console_height,
            fallback_console_width: self.fallback_console_width,
            limits: self.limits.clone(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/tuiwin/tuiwin.log` on Unix-like systems,
/// or the platform's state directory elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("tuiwin").join("tuiwin.log")
    } else {
        PathBuf::from("tuiwin.log")
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
/// Returns `~/.config/tuiwin/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("tuiwin").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument
/// 2. `TUIWIN_CONFIG` environment variable
/// 3. Default path `~/.config/tuiwin/config.toml`
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

    if let Ok(env_path) = std::env::var(CONFIG_ENV) {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
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
        auto_activate: config.auto_activate.unwrap_or(defaults.auto_activate),
        fallback_console_height: config
            .fallback_console_height
            .unwrap_or(defaults.fallback_console_height),
        fallback_console_width: config
            .fallback_console_width
            .unwrap_or(defaults.fallback_console_width),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        limits: config.limits.unwrap_or(defaults.limits),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `TUIWIN_CONSOLE_HEIGHT`: Override the fallback console height
/// - `TUIWIN_AUTO_ACTIVATE`: Override `auto_activate` (`true`/`false`, `1`/`0`)
///
/// Unparseable values are logged and ignored.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var(CONSOLE_HEIGHT_ENV) {
        match raw.trim().parse::<u16>() {
            Ok(height) => config.fallback_console_height = height,
            Err(err) => warn!(value = %raw, %err, "Ignoring {CONSOLE_HEIGHT_ENV}"),
        }
    }

    if let Ok(raw) = std::env::var(AUTO_ACTIVATE_ENV) {
        match parse_flag(&raw) {
            Some(flag) => config.auto_activate = flag,
            None => warn!(value = %raw, "Ignoring {AUTO_ACTIVATE_ENV}"),
        }
    }

    config
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Apply explicit overrides to resolved config.
///
/// Explicit overrides have the highest precedence and override all other
/// sources. Only values that are `Some` are applied.
///
/// Precedence chain: Defaults → Config File → Env Vars → Overrides (highest)
pub fn apply_overrides(
    mut config: ResolvedConfig,
    auto_activate_override: Option<bool>,
    console_height_override: Option<u16>,
) -> ResolvedConfig {
    if let Some(auto_activate) = auto_activate_override {
        config.auto_activate = auto_activate;
    }

    if let Some(height) = console_height_override {
        config.fallback_console_height = height;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_tuiwin_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("tuiwin.log"),
            "Default log path should end with 'tuiwin.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(
            resolved.log_file_path,
            default_log_path(),
            "Missing log_file_path in config should use default"
        );
    }
}
