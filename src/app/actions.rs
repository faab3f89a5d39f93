//! Actions representing effects the owner of a control must carry out.
//!
//! The event handler returns a `Vec<Action>` after processing each event. The
//! engine itself never calls back into the owner; the [`Dispatcher`] (or any
//! other runtime) executes the returned actions in order.
//!
//! [`Dispatcher`]: crate::app::Dispatcher
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{Action, SelectionValue};
//! use selectkit::Identifier;
//!
//! let actions = vec![Action::Commit(SelectionValue::Single(Some(Identifier::Int(3))))];
//! assert!(actions[0].commit_value().is_some());
//! ```

use super::selection::SelectionValue;

/// Effects produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Report a selection to the owning application.
    ///
    /// Single-selects emit this from every select and clear gesture.
    /// Multiple-selects emit it exactly once per close, carrying the
    /// selection as it stood when the menu closed.
    Commit(SelectionValue),
}

impl Action {
    #[must_use]
    pub const fn commit_value(&self) -> Option<&SelectionValue> {
        match self {
            Self::Commit(value) => Some(value),
        }
    }
}
