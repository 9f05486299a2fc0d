//! Viewer configuration.
//!
//! Handles loading, validating, and merging `fireplot.toml`. Stock defaults
//! are serialized to a TOML table and the user file is merged on top, so a
//! config file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! plot_dir = "."            # Directory holding fireplot-64-*.png and imagemap-*.map
//! log_level = "info"        # tracing filter used when RUST_LOG is unset
//!
//! [page]
//! title = "Fireplot"
//! heading = "Firewall plot"
//!
//! [colors]
//! background = "black"
//! foreground = "cyan"
//!
//! [server]
//! host = "127.0.0.1"
//! port = 8080
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Config file looked up in the working directory when `--config` is not given.
pub const CONFIG_FILE_NAME: &str = "fireplot.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Viewer configuration loaded from `fireplot.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Directory the plot generator writes into.
    pub plot_dir: PathBuf,
    /// Log filter directive used when `RUST_LOG` is not set.
    pub log_level: String,
    /// Page text.
    pub page: PageConfig,
    /// Page colours.
    pub colors: ColorConfig,
    /// HTTP host settings for `serve`.
    pub server: ServerConfig,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            plot_dir: PathBuf::from("."),
            log_level: "info".to_string(),
            page: PageConfig::default(),
            colors: ColorConfig::default(),
            server: ServerConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server.port must be non-zero".into(),
            ));
        }
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::Validation(
                "server.host must not be empty".into(),
            ));
        }
        for (key, value) in [
            ("colors.background", &self.colors.background),
            ("colors.foreground", &self.colors.foreground),
        ] {
            if !is_css_color(value) {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a CSS color name or #hex value, got {value:?}"
                )));
            }
        }
        Ok(())
    }
}

/// Accepts colour keywords and `#rgb`/`#rrggbb`-style hex values.
///
/// The value ends up inside a `<style>` element, so anything that could close
/// the rule or the element is refused.
fn is_css_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 4 | 6 | 8) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => !value.is_empty() && value.chars().all(|c| c.is_ascii_alphabetic()),
    }
}

/// Page text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PageConfig {
    /// Document `<title>`.
    pub title: String,
    /// Heading text; the date follows it.
    pub heading: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            title: "Fireplot".to_string(),
            heading: "Firewall plot".to_string(),
        }
    }
}

/// Page colours.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColorConfig {
    pub background: String,
    pub foreground: String,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            background: "black".to_string(),
            foreground: "cyan".to_string(),
        }
    }
}

/// HTTP host settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(ViewerConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Load config from `path`, merged over stock defaults and validated.
///
/// A missing file yields the defaults.
pub fn load_config(path: &Path) -> Result<ViewerConfig, ConfigError> {
    let merged = match load_raw_config(path)? {
        Some(overlay) => merge_toml(stock_defaults_value(), overlay),
        None => stock_defaults_value(),
    };
    let config: ViewerConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Returns a fully-commented stock `fireplot.toml`.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# Fireplot viewer configuration
# =============================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys cause an error.

# Directory the plot generator writes into. It must contain
#   fireplot-64-YYYY-MM-DD.png   plot for a day
#   imagemap-YYYY-MM-DD.map      optional <area> markup for that plot
#   fireplot.ico                 favicon
plot_dir = "."

# Log filter used when RUST_LOG is not set (e.g. "debug", "fireplot=trace").
log_level = "info"

# ---------------------------------------------------------------------------
# Page text
# ---------------------------------------------------------------------------
[page]
title = "Fireplot"
# The resolved date is appended after a space.
heading = "Firewall plot"

# ---------------------------------------------------------------------------
# Colors (CSS color names or #hex)
# ---------------------------------------------------------------------------
[colors]
background = "black"
foreground = "cyan"

# ---------------------------------------------------------------------------
# HTTP host used by `fireplot serve`
# ---------------------------------------------------------------------------
[server]
host = "127.0.0.1"
port = 8080
"##
}

/// Generate the page stylesheet from colour config.
pub fn generate_css(colors: &ColorConfig) -> String {
    format!(
        r#"body {{ background-color: {background}; color: {foreground}; }}
h1 {{ margin: 0px; padding: 0px; }}
div {{ margin: 0px; padding: 0px; }}"#,
        background = colors.background,
        foreground = colors.foreground,
    )
}
