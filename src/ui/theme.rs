//! Theme management and ANSI escape sequence generation.
//!
//! This module defines the color scheme of the terminal control surface,
//! supporting built-in themes and custom themes loaded from TOML files. It
//! provides utilities for converting hex colors to ANSI escape sequences.
//!
//! # Built-in Themes
//!
//! - `default-light`: Light palette (default)
//! - `default-dark`: Dark palette
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! label_fg = "#5F6B7A"
//! text_normal = "#1F2933"
//! text_dim = "#8A94A6"
//! border = "#D5DAE1"
//! search_bar_border = "#B8C0CC"
//! selection_fg = "#1F2933"
//! selection_bg = "#E8EEFF"
//! match_highlight_fg = "#1F2933"
//! match_highlight_bg = "#FFE8CC"
//! primary = "#3D5AFE"
//! empty_state_fg = "#8A94A6"
//! error_fg = "#CE4553"
//! ```
//!
//! # Example
//!
//! ```rust
//! use selectkit::Theme;
//!
//! let theme = Theme::from_name("default-dark").unwrap();
//! let styled = format!("{}Bold{}", Theme::bold(), Theme::reset());
//! assert!(styled.starts_with("\u{1b}[1m"));
//! assert!(Theme::fg(&theme.colors.primary).starts_with("\u{1b}[38;2;"));
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::{Result, SelectError};

/// Color scheme configuration for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Color palette for all UI elements.
    pub colors: ThemeColors,
}

/// Color definitions for all UI elements.
///
/// All colors are hex strings (e.g., "#1F2933").
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Control label color.
    pub label_fg: String,
    /// Optional background behind the label line.
    #[serde(default)]
    pub label_bg: Option<String>,

    /// Normal text color (option labels, selected value).
    pub text_normal: String,
    /// Dimmed text color (placeholders, helper text).
    pub text_dim: String,

    /// Separator line color.
    pub border: String,
    /// Search box border color.
    pub search_bar_border: String,

    /// Selected row foreground color.
    pub selection_fg: String,
    /// Selected row background color.
    pub selection_bg: String,

    /// Query match highlight foreground.
    pub match_highlight_fg: String,
    /// Query match highlight background.
    pub match_highlight_bg: String,

    /// Checkbox and select-all color.
    pub primary: String,

    /// "No options" message color.
    pub empty_state_fg: String,

    /// Required marker color.
    pub error_fg: String,
}

impl Theme {
    /// Loads a built-in theme by name.
    ///
    /// Returns `None` if the theme name is unknown.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "default-light" => include_str!("../../themes/default-light.toml"),
            "default-dark" => include_str!("../../themes/default-dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed (invalid syntax, missing colors).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| SelectError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| SelectError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Converts a hex color to an RGB tuple.
    ///
    /// Returns `(255, 255, 255)` (white) on parse errors.
    fn hex_to_rgb(hex: &str) -> (u8, u8, u8) {
        let hex = hex.trim_start_matches('#').trim();

        if hex.len() != 6 || !hex.is_ascii() {
            return (255, 255, 255);
        }

        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);

        (r, g, b)
    }

    /// ANSI 24-bit foreground escape (`\x1b[38;2;r;g;bm`) for a hex color.
    #[must_use]
    pub fn fg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[38;2;{r};{g};{b}m")
    }

    /// ANSI 24-bit background escape (`\x1b[48;2;r;g;bm`) for a hex color.
    #[must_use]
    pub fn bg(hex: &str) -> String {
        let (r, g, b) = Self::hex_to_rgb(hex);
        format!("\u{001b}[48;2;{r};{g};{b}m")
    }

    #[must_use]
    pub const fn bold() -> &'static str {
        "\u{001b}[1m"
    }

    #[must_use]
    pub const fn dim() -> &'static str {
        "\u{001b}[2m"
    }

    /// Clears all styling (colors, bold, dim).
    #[must_use]
    pub const fn reset() -> &'static str {
        "\u{001b}[0m"
    }
}

impl Default for Theme {
    /// Returns the `default-light` theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("default-light")
            .expect("Built-in default-light theme should always parse")
    }
}
