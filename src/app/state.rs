//! Select control state and view model computation.
//!
//! This module defines [`SelectState`], the single source of truth for one
//! select control: the catalog, the live query, the memoized visible set, the
//! selection and the open/closed state. The event handler mutates it; the
//! renderer reads it through [`SelectState::compute_viewmodel`].
//!
//! # State Components
//!
//! - **Catalog**: Every option the control offers, in display order
//! - **Query**: Current search text
//! - **Visible**: Catalog indices matching the query, recomputed by
//!   `apply_search_filter()` whenever catalog or query change
//! - **Selection**: Chosen id (single) or id set (multiple)
//! - **Open State**: Whether the option menu is showing
//!
//! Whether everything visible is selected is never stored; it is recomputed
//! from the visible set and the selection on every read.
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{SelectMode, SelectState};
//! use selectkit::{OptionRecord, Theme};
//!
//! let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
//! state.set_catalog(vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]);
//! state.set_query("alp");
//! assert_eq!(state.visible_options().count(), 1);
//! ```

use super::filter;
use super::handler::InitialSelection;
use super::modes::{OpenState, SeedPolicy, SelectMode};
use super::selection::{Selection, SelectionValue};
use crate::domain::{Catalog, Identifier, OptionRecord, Result, SelectError};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, OptionRow, SearchBarInfo, SelectAllInfo, SelectViewModel};

/// Message shown in place of option rows when nothing is visible.
pub const NO_OPTIONS_MESSAGE: &str = "No options";

/// Presentation settings that do not affect selection semantics.
///
/// Carried in state so the view model can be computed from one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Presentation {
    /// Label shown above the control.
    pub label: Option<String>,
    /// Helper or error text shown below the control.
    pub helper_text: Option<String>,
    /// Hides the clear affordance. Does not block clearing.
    pub required: bool,
    /// Marks the control as not accepting input.
    pub disabled: bool,
    /// Shows the search box in single mode. Multiple mode always shows it.
    pub enable_search: bool,
    /// Placeholder text of the search box.
    pub search_placeholder: String,
    /// Disabled hint row shown above the options.
    pub placeholder: Option<String>,
    /// Shows the clear affordance while a value is selected.
    pub show_clear_button: bool,
}

impl Default for Presentation {
    fn default() -> Self {
        Self {
            label: None,
            helper_text: None,
            required: false,
            disabled: false,
            enable_search: false,
            search_placeholder: "Type to search".to_string(),
            placeholder: None,
            show_clear_button: true,
        }
    }
}

/// State of one select control.
#[derive(Debug, Clone)]
pub struct SelectState {
    /// Every option the control offers, in display order.
    catalog: Catalog,

    /// Catalog indices matching `query`. Only `apply_search_filter()` writes it.
    visible: Vec<usize>,

    /// Current search text. Reset to empty on every close.
    query: String,

    /// Chosen id(s). The variant fixes the control's mode.
    pub selection: Selection,

    /// Whether the option menu is showing.
    pub open_state: OpenState,

    /// How initial-selection inputs combine with the current selection.
    pub seed_policy: SeedPolicy,

    /// Labels, placeholders and affordance flags.
    pub presentation: Presentation,

    /// Color scheme for rendering.
    pub theme: Theme,
}

impl SelectState {
    /// Creates an empty, closed control.
    ///
    /// # Example
    ///
    /// ```rust
    /// use selectkit::app::{SelectMode, SelectState};
    /// use selectkit::Theme;
    ///
    /// let state = SelectState::new(SelectMode::Single, Theme::default());
    /// assert!(!state.is_open());
    /// assert!(state.selection.is_empty());
    /// ```
    #[must_use]
    pub fn new(mode: SelectMode, theme: Theme) -> Self {
        Self {
            catalog: Vec::new(),
            visible: Vec::new(),
            query: String::new(),
            selection: Selection::new(mode),
            open_state: OpenState::Closed,
            seed_policy: SeedPolicy::default(),
            presentation: Presentation::default(),
            theme,
        }
    }

    #[must_use]
    pub fn with_seed_policy(mut self, policy: SeedPolicy) -> Self {
        self.seed_policy = policy;
        self
    }

    #[must_use]
    pub fn with_presentation(mut self, presentation: Presentation) -> Self {
        self.presentation = presentation;
        self
    }

    #[must_use]
    pub const fn mode(&self) -> SelectMode {
        self.selection.mode()
    }

    #[must_use]
    pub fn catalog(&self) -> &[OptionRecord] {
        &self.catalog
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open_state.is_open()
    }

    /// Replaces the catalog and recomputes the visible set.
    ///
    /// The selection is left untouched, even if it references ids the new
    /// catalog lacks.
    pub fn set_catalog(&mut self, catalog: Catalog) {
        tracing::debug!(options = catalog.len(), "catalog replaced");
        self.catalog = catalog;
        self.apply_search_filter();
    }

    /// Replaces the query and recomputes the visible set.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::trace!(query = %self.query, "search query updated");
        self.apply_search_filter();
    }

    /// Recomputes the visible set from the catalog and the query.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!("apply_search_filter",
            total_options = self.catalog.len(),
            query_len = self.query.len()
        ).entered();

        self.visible = filter::visible(&self.catalog, &self.query);

        tracing::debug!(visible_count = self.visible.len(), "search filter applied");
    }

    /// Options matching the current query, in catalog order.
    pub fn visible_options(&self) -> impl Iterator<Item = &OptionRecord> + '_ {
        self.visible.iter().filter_map(|&index| self.catalog.get(index))
    }

    fn visible_ids(&self) -> Vec<&Identifier> {
        self.visible_options().map(|option| &option.id).collect()
    }

    /// Whether every visible option is selected.
    ///
    /// Always `false` for single-selects and when nothing is visible.
    #[must_use]
    pub fn is_all_selected(&self) -> bool {
        match &self.selection {
            Selection::Multiple(multi) => multi.is_all_selected(self.visible_ids()),
            Selection::Single(_) => false,
        }
    }

    /// Applies a changed initial-selection input.
    ///
    /// Single mode replaces the selection with the input as soon as it
    /// arrives, even before any options are loaded, and only on this call: a
    /// later catalog or visible-set change does not re-apply it. The value is
    /// stored as given, not resolved against the catalog. Multiple mode
    /// follows `seed_policy`. Never commits.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnsupportedGesture`] if the input shape does
    /// not match the control's mode.
    pub fn seed_initial(&mut self, initial: InitialSelection) -> Result<()> {
        let policy = self.seed_policy;
        let mode = self.mode();
        match (&mut self.selection, initial) {
            (Selection::Single(single), InitialSelection::One(id)) => {
                single.seed(id);
                Ok(())
            }
            (Selection::Multiple(multi), InitialSelection::Many(ids)) => {
                multi.seed(ids, policy);
                tracing::debug!(selected = multi.len(), ?policy, "initial selection seeded");
                Ok(())
            }
            _ => Err(unsupported("seed_initial", mode)),
        }
    }

    /// Select-all / unselect-all over the visible options (multiple mode).
    ///
    /// Returns `true` if the selection changed. Does not commit.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnsupportedGesture`] on a single-select.
    pub fn toggle_all(&mut self) -> Result<bool> {
        let visible: Vec<Identifier> = self.visible_ids().into_iter().cloned().collect();
        let mode = self.mode();
        let Selection::Multiple(multi) = &mut self.selection else {
            return Err(unsupported("toggle_all", mode));
        };

        let refs: Vec<&Identifier> = visible.iter().collect();
        let changed = multi.toggle_all(&refs);
        tracing::debug!(changed, selected = multi.len(), "select-all toggled");
        Ok(changed)
    }

    /// Stores a full next selection produced by the control surface
    /// (multiple mode). Does not commit.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnsupportedGesture`] on a single-select.
    pub fn set_selection(&mut self, ids: Vec<Identifier>) -> Result<()> {
        let mode = self.mode();
        let Selection::Multiple(multi) = &mut self.selection else {
            return Err(unsupported("set_selection", mode));
        };
        multi.set(ids);
        Ok(())
    }

    /// Resolves a raw gesture value against the catalog (single mode).
    ///
    /// Returns the value to commit: the matching option's catalog-typed id,
    /// or `None` when nothing matched.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnsupportedGesture`] on a multiple-select.
    pub fn select(&mut self, raw: &Identifier) -> Result<Option<Identifier>> {
        let mode = self.mode();
        let Selection::Single(single) = &mut self.selection else {
            return Err(unsupported("select", mode));
        };
        let resolved = single.select(&self.catalog, raw);
        if resolved.is_none() {
            tracing::debug!(raw = %raw, "no option matches raw value, clearing");
        }
        Ok(resolved)
    }

    /// Clears a single-select, regardless of `required`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectError::UnsupportedGesture`] on a multiple-select.
    pub fn clear(&mut self) -> Result<()> {
        let mode = self.mode();
        let Selection::Single(single) = &mut self.selection else {
            return Err(unsupported("clear", mode));
        };
        single.clear();
        Ok(())
    }

    pub fn open(&mut self) {
        self.open_state = OpenState::Open;
    }

    /// Closes the menu and resets the query.
    ///
    /// Returns the value to commit: the selection snapshot for a
    /// multiple-select, `None` for a single-select.
    pub fn close(&mut self) -> Option<SelectionValue> {
        self.open_state = OpenState::Closed;
        if !self.query.is_empty() {
            self.set_query(String::new());
        }

        match self.selection {
            Selection::Multiple(_) => Some(self.selection.value()),
            Selection::Single(_) => None,
        }
    }

    /// Labels of the selected options, for the closed-control summary.
    ///
    /// Ids without a catalog entry render as their raw text.
    #[must_use]
    pub fn selected_labels(&self) -> Vec<String> {
        self.selection
            .ids()
            .iter()
            .map(|id| {
                self.catalog
                    .iter()
                    .find(|option| option.id.matches(id))
                    .map_or_else(|| id.to_string(), |option| option.label.clone())
            })
            .collect()
    }

    /// Computes the read-only view model the control surface renders.
    ///
    /// # Example
    ///
    /// ```rust
    /// use selectkit::app::{SelectMode, SelectState};
    /// use selectkit::Theme;
    ///
    /// let state = SelectState::new(SelectMode::Multiple, Theme::default());
    /// let vm = state.compute_viewmodel();
    /// assert!(vm.empty_state.is_some());
    /// assert!(vm.select_all.is_none());
    /// ```
    #[must_use]
    pub fn compute_viewmodel(&self) -> SelectViewModel {
        let highlight = !self.query.is_empty();

        let visible_options: Vec<OptionRow> = self
            .visible_options()
            .map(|option| OptionRow {
                id: option.id.clone(),
                label: option.label.clone(),
                is_selected: self.selection.contains(&option.id),
                highlight_ranges: if highlight {
                    filter::match_ranges(&option.label, &self.query)
                } else {
                    vec![]
                },
            })
            .collect();

        let is_all_selected = self.is_all_selected();
        let is_multiple = self.mode() == SelectMode::Multiple;

        let search_bar = (is_multiple || self.presentation.enable_search).then(|| SearchBarInfo {
            query: self.query.clone(),
            placeholder: self.presentation.search_placeholder.clone(),
        });

        let select_all = (is_multiple && !visible_options.is_empty()).then(|| SelectAllInfo {
            checked: is_all_selected,
            label: if is_all_selected { "Unselect All" } else { "Select All" }.to_string(),
        });

        let show_clear = !is_multiple
            && !self.selection.is_empty()
            && self.presentation.show_clear_button
            && !self.presentation.required;

        let empty_state = visible_options.is_empty().then(|| EmptyState {
            message: NO_OPTIONS_MESSAGE.to_string(),
        });

        SelectViewModel {
            mode: self.mode(),
            visible_options,
            selection: self.selection.value(),
            is_all_selected,
            query: self.query.clone(),
            is_open: self.is_open(),
            summary: self.selected_labels().join(", "),
            label: self.presentation.label.clone(),
            helper_text: self.presentation.helper_text.clone(),
            required: self.presentation.required,
            disabled: self.presentation.disabled,
            placeholder: self.presentation.placeholder.clone(),
            search_bar,
            select_all,
            show_clear,
            empty_state,
        }
    }
}

fn unsupported(gesture: &'static str, mode: SelectMode) -> SelectError {
    SelectError::UnsupportedGesture { gesture, mode }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_beta(mode: SelectMode) -> SelectState {
        let mut state = SelectState::new(mode, Theme::default());
        state.set_catalog(vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]);
        state
    }

    #[test]
    fn catalog_change_refreshes_visible_set() {
        let mut state = alpha_beta(SelectMode::Multiple);
        state.set_query("bet");
        assert_eq!(state.visible_options().count(), 1);

        state.set_catalog(vec![OptionRecord::new(3, "Betamax"), OptionRecord::new(4, "Beta")]);
        let labels: Vec<&str> = state.visible_options().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Betamax", "Beta"]);
    }

    #[test]
    fn all_selected_is_derived_from_visible_set() {
        let mut state = alpha_beta(SelectMode::Multiple);
        state.set_selection(vec![Identifier::Int(1)]).unwrap();
        assert!(!state.is_all_selected());

        state.set_query("alpha");
        assert!(state.is_all_selected());

        state.set_query("zzz");
        assert!(!state.is_all_selected());
    }

    #[test]
    fn wrong_mode_gestures_are_rejected() {
        let mut single = alpha_beta(SelectMode::Single);
        assert!(matches!(
            single.toggle_all(),
            Err(SelectError::UnsupportedGesture { gesture: "toggle_all", .. })
        ));

        let mut multi = alpha_beta(SelectMode::Multiple);
        assert!(multi.clear().is_err());
        assert!(multi.select(&Identifier::Int(1)).is_err());
    }

    #[test]
    fn selection_keeps_ids_missing_from_catalog() {
        let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
        state
            .seed_initial(InitialSelection::Many(vec![Identifier::Int(7)]))
            .unwrap();
        state.set_catalog(vec![OptionRecord::new(1, "Alpha")]);
        assert!(state.selection.contains(&Identifier::Int(7)));
        assert_eq!(state.selected_labels(), ["7"]);
    }

    #[test]
    fn viewmodel_reflects_multiple_mode() {
        let mut state = alpha_beta(SelectMode::Multiple);
        state.open();
        state.set_query("a");
        state.toggle_all().unwrap();

        let vm = state.compute_viewmodel();
        assert!(vm.is_open);
        assert!(vm.is_all_selected);
        assert_eq!(vm.select_all.map(|s| s.label), Some("Unselect All".to_string()));
        assert_eq!(vm.visible_options.len(), 2);
        assert!(vm.visible_options.iter().all(|row| row.is_selected));
        assert_eq!(vm.visible_options[0].highlight_ranges, vec![(0, 1), (4, 5)]);
        assert_eq!(vm.summary, "Alpha, Beta");
        assert!(vm.search_bar.is_some());
        assert!(!vm.show_clear);
    }

    #[test]
    fn clear_affordance_hidden_when_required() {
        let mut state = alpha_beta(SelectMode::Single);
        state.select(&Identifier::Int(2)).unwrap();
        assert!(state.compute_viewmodel().show_clear);

        state.presentation.required = true;
        let vm = state.compute_viewmodel();
        assert!(!vm.show_clear);
        assert!(vm.search_bar.is_none());
    }

    #[test]
    fn empty_catalog_shows_no_options() {
        let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
        assert!(!state.toggle_all().unwrap());
        let vm = state.compute_viewmodel();
        assert_eq!(vm.empty_state.map(|e| e.message), Some(NO_OPTIONS_MESSAGE.to_string()));
    }
}
