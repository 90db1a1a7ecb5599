//! Settings file parsing.
//!
//! docsea reads a plain `key = value` file from
//! `~/.config/docsea/settings.conf`. Unknown keys are ignored; missing or
//! unreadable files yield defaults. The `DOCSEA_API_URL` environment variable
//! overrides the configured API base URL.

use crate::theme;

/// Default directory API base URL when nothing is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";

/// Runtime settings resolved from file, environment, and CLI.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the remote directory API, without a trailing slash.
    pub api_base_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

/// Check if a line should be skipped (empty or comment).
///
/// Skips empty lines and lines starting with `#`, `//`, or `;`.
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// Parse a `key = value` pair from a line, trimming both sides.
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    if !trimmed.contains('=') {
        return None;
    }
    let mut parts = trimmed.splitn(2, '=');
    let key = parts.next()?.trim().to_string();
    let value = parts.next()?.trim().to_string();
    Some((key, value))
}

/// Parse settings text into a [`Settings`] value, falling back to defaults
/// for anything absent or malformed.
#[must_use]
pub fn parse_settings(text: &str) -> Settings {
    let mut settings = Settings::default();
    for line in text.lines() {
        if skip_comment_or_empty(line) {
            continue;
        }
        if let Some((key, value)) = parse_key_value(line) {
            if key == "api_base_url" && !value.is_empty() {
                settings.api_base_url = value.trim_end_matches('/').to_string();
            }
        }
    }
    settings
}

/// Load settings from `settings.conf` under the config directory, applying
/// the `DOCSEA_API_URL` environment override.
#[must_use]
pub fn load_settings() -> Settings {
    let path = theme::config_dir().join("settings.conf");
    let mut settings = std::fs::read_to_string(&path)
        .map(|text| parse_settings(&text))
        .unwrap_or_default();
    if let Ok(url) = std::env::var("DOCSEA_API_URL")
        && !url.trim().is_empty()
    {
        settings.api_base_url = url.trim().trim_end_matches('/').to_string();
    }
    settings
}
