//! selectkit: a headless select engine for single- and multiple-choice controls.
//!
//! selectkit provides:
//! - Option catalogs normalized from arbitrary JSON records via a field map
//! - Case-insensitive substring search with memoized visible sets
//! - Single selection committed per gesture, multiple selection batched until close
//! - Select-all / unselect-all over the visible options
//! - A terminal control surface with themes and avatar badges

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Control Surface (main.rs)                 │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling and commit timing                 │
//! │  - In-order dispatch to the owner                   │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌───────────────────────┐        ┌─────────────────────────┐
//! │ UI Layer (ui/)        │        │ Domain Layer (domain/)  │
//! │ - Rendering           │        │ - Identifiers           │
//! │ - Theming             │        │ - Option catalogs       │
//! │ - Components, avatars │        │ - Error types           │
//! └───────────────────────┘        └─────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing-subscriber setup                         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Selection engine with event/action model
//! - [`domain`]: Core domain types (identifiers, options, errors)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: Logging setup
//!
//! # Configuration
//!
//! A control is configured from a TOML file or from string key/value pairs:
//!
//! ```toml
//! mode = "multiple"
//! label = "Reviewers"
//! seed_policy = "replace"
//! theme_name = "default-dark"
//!
//! [field_map]
//! id_field = "user_id"
//! label_field = "name"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use selectkit::{handle_event, initialize, parse_options, Config, Event, SelectMode};
//!
//! let config = Config { mode: SelectMode::Multiple, ..Config::default() };
//! let mut state = initialize(&config);
//!
//! let catalog = parse_options(r#"[{"id": 1, "label": "Alpha"}]"#, &config.field_map)?;
//! handle_event(&mut state, &Event::OptionsChanged(catalog))?;
//! handle_event(&mut state, &Event::ToggleAll)?;
//! let (_, actions) = handle_event(&mut state, &Event::Close)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), selectkit::SelectError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Canonical Identifiers
//!
//! Gesture values meet catalog ids through [`Identifier::matches`]: `"3"`
//! and `3` are the same option, while two string ids such as `"03"` and `"3"`
//! stay distinct. The selected value a single-select commits is always the
//! catalog's own id.
//!
//! ## Queued Follow-ups
//!
//! Commit callbacks cannot mutate the control directly. Events they want
//! are queued and handled after the current one, so every event runs to
//! completion against a consistent state.
//!
//! ## Immutable View Models
//!
//! Rendering reads a computed view model, never the state:
//! - Derived values (all-selected, affordances) are resolved once
//! - Highlight ranges are precomputed
//! - Surfaces other than the bundled terminal renderer can consume it as-is

pub mod app;
pub mod domain;
pub mod observability;
pub mod ui;

pub use app::{
    handle_event, Action, Dispatcher, Event, EventQueue, InitialSelection, Presentation,
    SeedPolicy, SelectMode, SelectState, SelectionValue, ToggleValue,
};
pub use domain::{
    normalize, normalize_strict, normalize_with, parse_options, Catalog, FieldMap, Identifier,
    OptionRecord, Result, SelectError,
};
pub use ui::{render, Theme};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Control configuration.
///
/// Loaded from TOML (every field optional) or from string key/value pairs.
///
/// # Example
///
/// ```toml
/// mode = "single"
/// required = true
/// enable_search = true
/// label = "Country"
/// theme_file = "/path/to/theme.toml"
/// trace_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// Single or multiple selection. Default: `single`
    pub mode: SelectMode,

    /// Hides the clear affordance. Does not prevent clearing.
    pub required: bool,

    /// Marks the control as not accepting input.
    pub disabled: bool,

    /// Shows the search box in single mode. Multiple mode always has one.
    pub enable_search: bool,

    /// Placeholder of the search box. Default: `"Type to search"`
    pub search_placeholder: String,

    /// Disabled hint row shown above the options.
    pub placeholder: Option<String>,

    /// Shows the clear affordance while a value is selected. Default: `true`
    pub show_clear_button: bool,

    /// Label shown above the control.
    pub label: Option<String>,

    /// Helper or error text shown below the control.
    pub helper_text: Option<String>,

    /// How initial-selection inputs combine with the current selection.
    ///
    /// Default: `merge`
    pub seed_policy: SeedPolicy,

    /// Which record fields hold option ids and labels.
    pub field_map: FieldMap,

    /// Built-in theme name to use.
    ///
    /// Options: `default-light`, `default-dark`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Log level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Append log lines to this file instead of stderr.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let presentation = Presentation::default();
        Self {
            mode: SelectMode::default(),
            required: presentation.required,
            disabled: presentation.disabled,
            enable_search: presentation.enable_search,
            search_placeholder: presentation.search_placeholder,
            placeholder: None,
            show_clear_button: presentation.show_clear_button,
            label: None,
            helper_text: None,
            seed_policy: SeedPolicy::default(),
            field_map: FieldMap::default(),
            theme_name: None,
            theme_file: None,
            trace_level: None,
            log_file: None,
        }
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}

impl Config {
    /// Parses configuration from string key/value pairs.
    ///
    /// Parsing is lenient: unknown keys are ignored and values that do not
    /// parse keep their defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `mode`: `single` | `multiple` (or `multi`)
    /// - `required`, `disabled`, `enable_search`, `show_clear_button`:
    ///   `true`/`false`, `yes`/`no`, `on`/`off`, `1`/`0`
    /// - `seed_policy`: `merge` | `replace`
    /// - `id_field`, `label_field`: field map entries
    /// - `theme`: built-in theme name
    /// - everything else: taken verbatim
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use selectkit::{Config, SelectMode};
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("mode".to_string(), "multi".to_string());
    /// map.insert("required".to_string(), "yes".to_string());
    /// map.insert("label_field".to_string(), "name".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.mode, SelectMode::Multiple);
    /// assert!(config.required);
    /// assert_eq!(config.field_map.label_field, "name");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();
        let flag = |key: &str, default: bool| {
            config.get(key).and_then(|s| parse_flag(s)).unwrap_or(default)
        };
        let text = |key: &str| {
            config
                .get(key)
                .map(|s| s.trim())
                .filter(|s| !s.is_empty())
                .map(String::from)
        };

        let field_map = FieldMap::new(
            text("id_field").unwrap_or(defaults.field_map.id_field),
            text("label_field").unwrap_or(defaults.field_map.label_field),
        );

        Self {
            mode: config
                .get("mode")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.mode),
            required: flag("required", defaults.required),
            disabled: flag("disabled", defaults.disabled),
            enable_search: flag("enable_search", defaults.enable_search),
            search_placeholder: text("search_placeholder").unwrap_or(defaults.search_placeholder),
            placeholder: text("placeholder"),
            show_clear_button: flag("show_clear_button", defaults.show_clear_button),
            label: text("label"),
            helper_text: text("helper_text"),
            seed_policy: config
                .get("seed_policy")
                .and_then(|s| s.parse().ok())
                .unwrap_or(defaults.seed_policy),
            field_map,
            theme_name: text("theme"),
            theme_file: text("theme_file"),
            trace_level: text("trace_level"),
            log_file: text("log_file").map(PathBuf::from),
        }
    }

    /// Parses configuration from TOML text. Missing keys take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Config`] on invalid TOML or mistyped values.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| SelectError::Config(format!("invalid config: {e}")))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::Io`] if the file cannot be read, or
    /// [`SelectError::Config`] if it does not parse.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Presentation settings carried into [`SelectState`].
    #[must_use]
    pub fn presentation(&self) -> Presentation {
        Presentation {
            label: self.label.clone(),
            helper_text: self.helper_text.clone(),
            required: self.required,
            disabled: self.disabled,
            enable_search: self.enable_search,
            search_placeholder: self.search_placeholder.clone(),
            placeholder: self.placeholder.clone(),
            show_clear_button: self.show_clear_button,
        }
    }

    /// Resolves the theme: `theme_file`, then `theme_name`, then the default.
    ///
    /// Failures fall back to the default theme with a debug log.
    #[must_use]
    pub fn resolve_theme(&self) -> Theme {
        self.theme_file.as_ref().map_or_else(
            || {
                self.theme_name.as_ref().map_or_else(Theme::default, |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                })
            },
            |theme_file| {
                Theme::from_file(theme_file).unwrap_or_else(|e| {
                    tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                    Theme::default()
                })
            },
        )
    }
}

/// Builds an empty, closed control from configuration.
///
/// The returned state has the configured mode, seed policy, presentation
/// and theme. Options and initial selection arrive later as events.
///
/// # Example
///
/// ```rust
/// use selectkit::{initialize, Config};
///
/// let config = Config {
///     label: Some("Country".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert_eq!(state.presentation.label.as_deref(), Some("Country"));
/// ```
#[must_use]
pub fn initialize(config: &Config) -> SelectState {
    tracing::debug!(mode = %config.mode, "initializing select control");

    SelectState::new(config.mode, config.resolve_theme())
        .with_seed_policy(config.seed_policy)
        .with_presentation(config.presentation())
}
