//! Configuration loading from environment variables.

use crate::constants::{DEFAULT_NARROW_LAYOUT_QUERY, DEFAULT_PORT};
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for PasteView.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    /// Optional catalog file; the built-in catalog is used when unset.
    pub languages_path: Option<PathBuf>,
    /// Media query that switches paste controls into the phone layout.
    pub narrow_layout_query: String,
    pub allow_public_access: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            languages_path: None,
            narrow_layout_query: DEFAULT_NARROW_LAYOUT_QUERY.to_string(),
            allow_public_access: false,
        }
    }
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: String) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Ok(home) = env::var("HOME") {
            if !home.trim().is_empty() {
                return PathBuf::from(home).join(rest);
            }
        }
    }
    PathBuf::from(path)
}

/// Parse a boolean-like environment flag value.
///
/// # Supported Values
/// - Truthy: `1`, `true`, `yes`, `on`
/// - Falsy: `0`, `false`, `no`, `off`, empty string
///
/// Matching is case-insensitive and ignores surrounding whitespace.
///
/// # Returns
/// `Some(bool)` when the value is recognized, otherwise `None`.
pub fn parse_env_flag(value: &str) -> Option<bool> {
    let normalized = value.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "" | "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Read a boolean flag from the environment.
///
/// Missing or unrecognized values are treated as `false`.
pub fn env_flag_enabled(name: &str) -> bool {
    env::var(name)
        .ok()
        .and_then(|value| parse_env_flag(&value))
        .unwrap_or(false)
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Returns
    /// A populated [`Config`] with defaults applied when env vars are missing.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.trim().parse().ok())
                .unwrap_or(defaults.port),
            languages_path: env::var("LANGUAGES_PATH")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .map(expand_tilde),
            narrow_layout_query: env::var("NARROW_LAYOUT_QUERY")
                .ok()
                .filter(|value| !value.trim().is_empty())
                .unwrap_or(defaults.narrow_layout_query),
            allow_public_access: env_flag_enabled("ALLOW_PUBLIC_ACCESS"),
        }
    }
}
