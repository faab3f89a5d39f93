//! Event handling and commit timing.
//!
//! This module implements the handler that turns control-surface gestures and
//! owner inputs into state changes and commit actions. It is where the two
//! modes' commit timing lives:
//!
//! - **Single mode**: `Toggle` and `Clear` commit immediately. `Close` only
//!   resets the query and closes the menu.
//! - **Multiple mode**: `Toggle` and `ToggleAll` change the selection
//!   silently. `Close` commits the selection exactly once and resets the query
//!   in the same step.
//!
//! # Architecture
//!
//! The handler follows a unidirectional data flow pattern:
//! 1. The control surface or owner produces an [`Event`]
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur via `SelectState` methods
//! 4. Commit actions are collected and returned for execution
//!
//! Events are handled one at a time to completion; nothing is deferred.
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{handle_event, Action, Event, SelectMode, SelectState, ToggleValue};
//! use selectkit::{Identifier, OptionRecord, Theme};
//!
//! let mut state = SelectState::new(SelectMode::Single, Theme::default());
//! handle_event(&mut state, &Event::OptionsChanged(vec![OptionRecord::new(3, "Three")]))?;
//! let (_, actions) = handle_event(&mut state, &Event::Toggle(ToggleValue::One("3".into())))?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), selectkit::SelectError>(())
//! ```

use super::actions::Action;
use super::selection::SelectionValue;
use super::state::SelectState;
use crate::domain::{Catalog, Identifier, Result};

/// Payload of a toggle gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleValue {
    /// Raw value of the row a single-select user picked. Resolved against
    /// the catalog under canonical equality.
    One(Identifier),
    /// Full next selection of a multiple-select, computed by the surface
    /// from the current selection and the row the user toggled.
    Many(Vec<Identifier>),
}

/// Initial-selection input supplied by the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InitialSelection {
    /// Single-select value; `None` means nothing selected.
    One(Option<Identifier>),
    /// Multiple-select ids.
    Many(Vec<Identifier>),
}

/// Gestures from the control surface and inputs from the owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Opens the option menu.
    Open,
    /// Closes the option menu and resets the query. Commits in multiple mode.
    Close,
    /// Replaces the search query.
    QueryChanged(String),
    /// Selects a row (single) or stores a new selection (multiple).
    Toggle(ToggleValue),
    /// Select-all / unselect-all over the visible rows. Multiple mode only.
    ToggleAll,
    /// Clears the selection and commits. Single mode only.
    Clear,
    /// The owner supplied a new option list.
    OptionsChanged(Catalog),
    /// The owner supplied a new initial selection.
    InitialSelectionChanged(InitialSelection),
}

impl Event {
    /// Short name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Close => "close",
            Self::QueryChanged(_) => "query_changed",
            Self::Toggle(_) => "toggle",
            Self::ToggleAll => "toggle_all",
            Self::Clear => "clear",
            Self::OptionsChanged(_) => "options_changed",
            Self::InitialSelectionChanged(_) => "initial_selection_changed",
        }
    }
}

/// Processes an event, mutates state, and returns the actions to execute.
///
/// # Returns
///
/// `(should_render, actions)`: whether the view model may have changed, and
/// the commits produced by this event in order. At most one commit is
/// produced per event.
///
/// # Errors
///
/// Returns [`SelectError::UnsupportedGesture`] when the event does not apply
/// to the control's mode (e.g. `ToggleAll` on a single-select). State is
/// unchanged in that case.
///
/// [`SelectError::UnsupportedGesture`]: crate::SelectError::UnsupportedGesture
///
/// # Tracing
///
/// Each call enters a debug-level span carrying the event name.
pub fn handle_event(state: &mut SelectState, event: &Event) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = event.name(), mode = %state.mode()).entered();

    match event {
        Event::Open => {
            if state.is_open() {
                return Ok((false, vec![]));
            }
            state.open();
            Ok((true, vec![]))
        }
        Event::Close => {
            tracing::debug!(query = %state.query(), "closing");
            let actions = state
                .close()
                .map(|snapshot| {
                    tracing::debug!(value = ?snapshot, "committing on close");
                    vec![Action::Commit(snapshot)]
                })
                .unwrap_or_default();
            Ok((true, actions))
        }
        Event::QueryChanged(text) => {
            if state.query() == text {
                return Ok((false, vec![]));
            }
            state.set_query(text.clone());
            Ok((true, vec![]))
        }
        Event::Toggle(ToggleValue::One(raw)) => {
            let resolved = state.select(raw)?;
            tracing::debug!(raw = %raw, value = ?resolved, "committing selection");
            Ok((true, vec![Action::Commit(SelectionValue::Single(resolved))]))
        }
        Event::Toggle(ToggleValue::Many(ids)) => {
            state.set_selection(ids.clone())?;
            Ok((true, vec![]))
        }
        Event::ToggleAll => {
            let changed = state.toggle_all()?;
            Ok((changed, vec![]))
        }
        Event::Clear => {
            state.clear()?;
            tracing::debug!("committing cleared selection");
            Ok((true, vec![Action::Commit(SelectionValue::Single(None))]))
        }
        Event::OptionsChanged(catalog) => {
            // Structural comparison: a list that only retypes ids is a change.
            if state.catalog() == catalog.as_slice() {
                tracing::debug!("options unchanged, skipping refilter");
                return Ok((false, vec![]));
            }
            state.set_catalog(catalog.clone());
            Ok((true, vec![]))
        }
        Event::InitialSelectionChanged(initial) => {
            state.seed_initial(initial.clone())?;
            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::SelectMode;
    use crate::domain::OptionRecord;
    use crate::ui::Theme;

    fn state(mode: SelectMode) -> SelectState {
        let mut state = SelectState::new(mode, Theme::default());
        handle_event(
            &mut state,
            &Event::OptionsChanged(vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]),
        )
        .unwrap();
        state
    }

    fn commits(actions: &[Action]) -> Vec<SelectionValue> {
        actions.iter().filter_map(Action::commit_value).cloned().collect()
    }

    #[test]
    fn single_close_never_commits() {
        let mut state = state(SelectMode::Single);
        handle_event(&mut state, &Event::Open).unwrap();
        handle_event(&mut state, &Event::QueryChanged("be".into())).unwrap();

        let (render, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert!(render);
        assert!(actions.is_empty());
        assert_eq!(state.query(), "");
        assert!(!state.is_open());
    }

    #[test]
    fn single_toggle_commits_immediately() {
        let mut state = state(SelectMode::Single);
        let (_, actions) =
            handle_event(&mut state, &Event::Toggle(ToggleValue::One("2".into()))).unwrap();
        assert_eq!(commits(&actions), vec![SelectionValue::Single(Some(Identifier::Int(2)))]);
    }

    #[test]
    fn multiple_toggles_are_silent_until_close() {
        let mut state = state(SelectMode::Multiple);
        let (_, a) = handle_event(&mut state, &Event::Toggle(ToggleValue::Many(vec![Identifier::Int(2)]))).unwrap();
        let (_, b) = handle_event(&mut state, &Event::ToggleAll).unwrap();
        assert!(a.is_empty() && b.is_empty());

        let (_, actions) = handle_event(&mut state, &Event::Close).unwrap();
        assert_eq!(
            commits(&actions),
            vec![SelectionValue::Multiple(vec![Identifier::Int(1), Identifier::Int(2)])]
        );
    }

    #[test]
    fn unchanged_query_skips_render() {
        let mut state = state(SelectMode::Multiple);
        let (render, _) = handle_event(&mut state, &Event::QueryChanged(String::new())).unwrap();
        assert!(!render);
    }

    #[test]
    fn retyped_options_replace_the_catalog() {
        let mut state = SelectState::new(SelectMode::Single, Theme::default());
        handle_event(&mut state, &Event::OptionsChanged(vec![OptionRecord::new(3, "Three")])).unwrap();

        let (render, _) =
            handle_event(&mut state, &Event::OptionsChanged(vec![OptionRecord::new("3", "Three")]))
                .unwrap();
        assert!(render);
        assert_eq!(state.catalog()[0].id, Identifier::from("3"));

        let (_, actions) =
            handle_event(&mut state, &Event::Toggle(ToggleValue::One(Identifier::Int(3)))).unwrap();
        assert_eq!(commits(&actions), vec![SelectionValue::Single(Some(Identifier::from("3")))]);
    }

    #[test]
    fn identical_options_skip_render() {
        let mut state = state(SelectMode::Single);
        let (render, _) = handle_event(
            &mut state,
            &Event::OptionsChanged(vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]),
        )
        .unwrap();
        assert!(!render);
    }

    #[test]
    fn gestures_for_other_mode_fail_without_side_effects() {
        let mut state = state(SelectMode::Single);
        assert!(handle_event(&mut state, &Event::ToggleAll).is_err());
        assert!(handle_event(&mut state, &Event::Toggle(ToggleValue::Many(vec![]))).is_err());
        assert!(state.selection.is_empty());
    }
}
