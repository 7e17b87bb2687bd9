//! Configuration file loading with precedence handling.

use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;

use crate::layout::{EdgeInsets, LayoutCache, LayoutMetrics, Size};
use crate::model::LineLimit;

/// Environment variable naming an alternative config file.
pub const CONFIG_ENV: &str = "REVIEW_FEED_CONFIG";
/// Environment variable overriding the truncation line count.
pub const TRUNCATION_LINES_ENV: &str = "REVIEW_FEED_TRUNCATION_LINES";
/// Environment variable overriding the log file path.
pub const LOG_FILE_ENV: &str = "REVIEW_FEED_LOG_FILE";

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
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

    /// An override environment variable holds an unusable value.
    #[error("Invalid value {value:?} for {name}")]
    InvalidEnvValue {
        /// Variable name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/review-feed/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Body lines shown before a review is cut (0 = never cut).
    #[serde(default)]
    pub truncation_lines: Option<u32>,

    /// Capacity of the geometry cache (0 = built-in default).
    #[serde(default)]
    pub layout_cache_capacity: Option<usize>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Row width the host lays out at.
    #[serde(default)]
    pub width: Option<f64>,

    /// Spacing overrides.
    #[serde(default)]
    pub metrics: Option<MetricsSection>,
}

/// Layout metric overrides from TOML.
///
/// Structure matches the TOML format:
/// ```toml
/// [metrics]
/// avatar_size = 40.0
/// insets = { top = 8.0, left = 16.0, bottom = 8.0, right = 16.0 }
/// ```
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct MetricsSection {
    /// Review row insets.
    #[serde(default)]
    pub insets: Option<InsetsEntry>,
    /// Side of the (square) avatar.
    #[serde(default)]
    pub avatar_size: Option<f64>,
    /// Avatar corner rounding.
    #[serde(default)]
    pub avatar_corner_radius: Option<f64>,
    /// Width of the star strip.
    #[serde(default)]
    pub rating_width: Option<f64>,
    /// Height of the star strip.
    #[serde(default)]
    pub rating_height: Option<f64>,
    /// Gap between avatar and text column.
    #[serde(default)]
    pub avatar_to_text: Option<f64>,
    /// Gap below the author line.
    #[serde(default)]
    pub author_to_rating: Option<f64>,
    /// Gap below the star strip.
    #[serde(default)]
    pub rating_to_body: Option<f64>,
    /// Gap below the body (or affordance).
    #[serde(default)]
    pub body_to_created: Option<f64>,
    /// Gap between affordance and date line.
    #[serde(default)]
    pub affordance_to_created: Option<f64>,
    /// Summary row insets.
    #[serde(default)]
    pub summary_insets: Option<InsetsEntry>,
}

/// Four-sided insets; all sides required.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InsetsEntry {
    /// Top inset.
    pub top: f64,
    /// Left inset.
    pub left: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Right inset.
    pub right: f64,
}

impl From<InsetsEntry> for EdgeInsets {
    fn from(entry: InsetsEntry) -> Self {
        EdgeInsets::new(entry.top, entry.left, entry.bottom, entry.right)
    }
}

impl MetricsSection {
    /// Apply every present override on top of `base`.
    pub fn apply_to(&self, base: LayoutMetrics) -> LayoutMetrics {
        let avatar = self
            .avatar_size
            .map_or(base.avatar_size, |side| Size::new(side, side));
        LayoutMetrics {
            insets: self.insets.map_or(base.insets, EdgeInsets::from),
            avatar_size: avatar,
            avatar_corner_radius: self
                .avatar_corner_radius
                .unwrap_or(base.avatar_corner_radius),
            rating_size: Size::new(
                self.rating_width.unwrap_or(base.rating_size.width),
                self.rating_height.unwrap_or(base.rating_size.height),
            ),
            avatar_to_text: self.avatar_to_text.unwrap_or(base.avatar_to_text),
            author_to_rating: self.author_to_rating.unwrap_or(base.author_to_rating),
            rating_to_body: self.rating_to_body.unwrap_or(base.rating_to_body),
            body_to_created: self.body_to_created.unwrap_or(base.body_to_created),
            affordance_to_created: self
                .affordance_to_created
                .unwrap_or(base.affordance_to_created),
            summary_insets: self
                .summary_insets
                .map_or(base.summary_insets, EdgeInsets::from),
        }
    }
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Truncation limit for newly built review rows.
    pub truncation_lines: LineLimit,
    /// Geometry cache capacity.
    pub layout_cache_capacity: usize,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Layout width.
    pub width: f64,
    /// Layout metrics.
    pub metrics: LayoutMetrics,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            truncation_lines: LineLimit::DEFAULT,
            layout_cache_capacity: LayoutCache::DEFAULT_CAPACITY,
            log_file_path: default_log_path(),
            width: 320.0,
            metrics: LayoutMetrics::default(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/review-feed/review-feed.log` on Linux,
/// or the platform state directory elsewhere.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("review-feed").join("review-feed.log")
    } else {
        PathBuf::from("review-feed.log")
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
/// Returns `~/.config/review-feed/config.toml` on Linux, appropriate path on
/// other platforms. Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("review-feed").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `REVIEW_FEED_CONFIG` environment variable
/// 3. Default path `~/.config/review-feed/config.toml`
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
        truncation_lines: config
            .truncation_lines
            .map_or(defaults.truncation_lines, LineLimit::new),
        layout_cache_capacity: config
            .layout_cache_capacity
            .unwrap_or(defaults.layout_cache_capacity),
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        width: config.width.unwrap_or(defaults.width),
        metrics: config
            .metrics
            .map_or(defaults.metrics, |section| section.apply_to(defaults.metrics)),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `REVIEW_FEED_TRUNCATION_LINES`: Override truncation line count
/// - `REVIEW_FEED_LOG_FILE`: Override log file path
///
/// # Errors
///
/// `ConfigError::InvalidEnvValue` if the line count is not a non-negative integer.
pub fn apply_env_overrides(mut config: ResolvedConfig) -> Result<ResolvedConfig, ConfigError> {
    if let Ok(raw) = std::env::var(TRUNCATION_LINES_ENV) {
        let lines = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| ConfigError::InvalidEnvValue {
                name: TRUNCATION_LINES_ENV,
                value: raw.clone(),
            })?;
        config.truncation_lines = LineLimit::new(lines);
    }

    if let Ok(path) = std::env::var(LOG_FILE_ENV) {
        config.log_file_path = PathBuf::from(path);
    }

    Ok(config)
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(
    mut config: ResolvedConfig,
    width_override: Option<f64>,
    lines_override: Option<u32>,
    log_file_override: Option<PathBuf>,
) -> ResolvedConfig {
    if let Some(width) = width_override {
        config.width = width;
    }

    if let Some(lines) = lines_override {
        config.truncation_lines = LineLimit::new(lines);
    }

    if let Some(path) = log_file_override {
        config.log_file_path = path;
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
