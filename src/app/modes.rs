//! Mode and lifecycle state types for a select control.
//!
//! These enums fix how a control behaves: [`SelectMode`] picks single or
//! multiple selection (and with it the commit timing), [`OpenState`] tracks
//! whether the option menu is showing, and [`SeedPolicy`] decides how a new
//! initial-selection input combines with the current selection.
//!
//! # State Machine
//!
//! ```text
//!            Open
//!   Closed ─────────▶ Open
//!     ▲                │
//!     └──── Close ─────┘   (query reset; multiple mode commits here)
//! ```
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::modes::{OpenState, SelectMode, SeedPolicy};
//!
//! let mode = SelectMode::Multiple;
//! assert_eq!(OpenState::default(), OpenState::Closed);
//! assert_eq!(SeedPolicy::default(), SeedPolicy::Merge);
//! assert_eq!(mode.to_string(), "multiple");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selection cardinality of a control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectMode {
    /// At most one option. Every select or clear commits immediately.
    #[default]
    Single,

    /// Any number of options, with a select-all toggle. Changes are batched
    /// and committed once when the menu closes.
    Multiple,
}

impl fmt::Display for SelectMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Single => "single",
            Self::Multiple => "multiple",
        })
    }
}

impl FromStr for SelectMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "multiple" | "multi" => Ok(Self::Multiple),
            other => Err(format!("unknown select mode `{other}`")),
        }
    }
}

/// Whether the option menu is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OpenState {
    #[default]
    Closed,
    Open,
}

impl OpenState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

/// How a changed initial-selection input combines with the current selection
/// of a multiple-select.
///
/// Single-selects always replace.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedPolicy {
    /// Union the new input into the current selection. Ids from earlier
    /// inputs are kept, so selections accumulate across inputs.
    #[default]
    Merge,

    /// Discard the current selection and take the new input as-is.
    Replace,
}

impl FromStr for SeedPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "merge" => Ok(Self::Merge),
            "replace" => Ok(Self::Replace),
            other => Err(format!("unknown seed policy `{other}`")),
        }
    }
}
