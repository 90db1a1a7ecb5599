//! Color palette and on-disk locations for docsea.
//!
//! The palette is a small, opinionated dark theme used directly by the
//! rendering code; the path helpers resolve (and create) the config and log
//! directories under the user's home.

use std::env;
use std::path::{Path, PathBuf};

use ratatui::style::Color;

/// Application theme palette used by rendering code.
pub struct Theme {
    /// Primary background color for the canvas.
    pub base: Color,
    /// Primary foreground text color.
    pub text: Color,
    /// Secondary text for less prominent content.
    pub subtext: Color,
    /// Muted border color.
    pub overlay: Color,
    /// Accent for selection and interactive highlights.
    pub sapphire: Color,
    /// Accent for headings.
    pub mauve: Color,
    /// Positive state color (ratings, confirmations).
    pub green: Color,
    /// Warning/attention state color.
    pub yellow: Color,
    /// Error/danger state color.
    pub red: Color,
}

/// Construct a [`Color::Rgb`] from an 8-bit RGB triplet.
fn hex(rgb: (u8, u8, u8)) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Return the application's default theme palette.
#[must_use]
pub fn theme() -> Theme {
    Theme {
        base: hex((0x1e, 0x1e, 0x2e)),
        text: hex((0xcd, 0xd6, 0xf4)),
        subtext: hex((0xa6, 0xad, 0xc8)),
        overlay: hex((0x7f, 0x84, 0x9c)),
        sapphire: hex((0x74, 0xc7, 0xec)),
        mauve: hex((0xcb, 0xa6, 0xf7)),
        green: hex((0xa6, 0xe3, 0xa1)),
        yellow: hex((0xf9, 0xe2, 0xaf)),
        red: hex((0xf3, 0x8b, 0xa8)),
    }
}

/// Return `$HOME/.config/docsea`, ensuring it exists.
fn home_config_dir() -> Option<PathBuf> {
    if let Ok(home) = env::var("HOME") {
        let dir = Path::new(&home).join(".config").join("docsea");
        if std::fs::create_dir_all(&dir).is_ok() {
            return Some(dir);
        }
    }
    None
}

/// Config directory for docsea (ensured to exist).
///
/// Prefers `$HOME/.config/docsea`; falls back to `$XDG_CONFIG_HOME/docsea`.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(dir) = home_config_dir() {
        return dir;
    }
    let base = env::var("XDG_CONFIG_HOME")
        .ok()
        .filter(|p| !p.trim().is_empty())
        .map_or_else(
            || {
                let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
                Path::new(&home).join(".config")
            },
            PathBuf::from,
        );
    let dir = base.join("docsea");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Logs directory under config: `$HOME/.config/docsea/logs` (ensured to exist).
#[must_use]
pub fn logs_dir() -> PathBuf {
    let dir = config_dir().join("logs");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

/// Path of the cross-session provider cache file.
#[must_use]
pub fn provider_cache_path() -> PathBuf {
    config_dir().join("providers_cache.json")
}
