//! View model types representing renderable control state.
//!
//! View models are immutable snapshots computed by
//! `SelectState::compute_viewmodel()` and consumed by a control surface. They
//! carry no behavior; every derived value (whether all visible rows are
//! selected, which affordances show, highlight ranges) is resolved before the
//! surface sees it.
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{SelectMode, SelectState};
//! use selectkit::{OptionRecord, Theme};
//!
//! let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
//! state.set_catalog(vec![OptionRecord::new(1, "Alpha")]);
//!
//! let vm = state.compute_viewmodel();
//! assert_eq!(vm.visible_options[0].label, "Alpha");
//! assert_eq!(vm.select_all.unwrap().label, "Select All");
//! ```

use crate::app::{SelectMode, SelectionValue};
use crate::domain::Identifier;

/// Complete view model of one select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectViewModel {
    /// Mode of the control.
    pub mode: SelectMode,

    /// Rows matching the current query, in catalog order.
    pub visible_options: Vec<OptionRow>,

    /// Current selection.
    pub selection: SelectionValue,

    /// Whether every visible row is selected. Always `false` in single mode.
    pub is_all_selected: bool,

    /// Current search text.
    pub query: String,

    /// Whether the option menu is showing.
    pub is_open: bool,

    /// Labels of the selected options joined with `", "`.
    pub summary: String,

    /// Label shown above the control.
    pub label: Option<String>,

    /// Text shown below the control.
    pub helper_text: Option<String>,

    /// Whether the control is marked required.
    pub required: bool,

    /// Whether the control is disabled.
    pub disabled: bool,

    /// Disabled hint row shown above the options.
    pub placeholder: Option<String>,

    /// Search box, when the control has one.
    pub search_bar: Option<SearchBarInfo>,

    /// Select-all row. Multiple mode with at least one visible row only.
    pub select_all: Option<SelectAllInfo>,

    /// Whether the clear affordance shows (single mode, value selected, not required).
    pub show_clear: bool,

    /// Shown in place of option rows when nothing is visible.
    pub empty_state: Option<EmptyState>,
}

/// One option row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionRow {
    pub id: Identifier,
    pub label: String,
    pub is_selected: bool,

    /// Character ranges of `label` matching the query.
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Search box state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Current search query text.
    pub query: String,
    /// Hint shown while the query is empty.
    pub placeholder: String,
}

/// Select-all row state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectAllInfo {
    /// Checkbox state; mirrors `is_all_selected`.
    pub checked: bool,
    /// "Select All" or "Unselect All".
    pub label: String,
}

/// Empty state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyState {
    pub message: String,
}
