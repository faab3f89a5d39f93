//! In-order event dispatch with owner commit callbacks.
//!
//! [`Dispatcher`] owns a [`SelectState`] and a commit callback. Events are
//! queued and handled strictly in arrival order; each one runs to completion
//! before the next starts. The callback receives each committed value and a
//! [`EventQueue`] handle. It cannot touch the state itself, so follow-up
//! events it wants (closing after a pick, say) are queued behind the current
//! one instead of nesting inside it.
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{Dispatcher, Event, EventQueue, SelectMode, SelectState, SelectionValue};
//! use selectkit::{OptionRecord, Theme};
//!
//! let mut committed = Vec::new();
//! let state = SelectState::new(SelectMode::Multiple, Theme::default());
//! let mut dispatcher = Dispatcher::new(state, |value: &SelectionValue, _queue: &mut EventQueue| {
//!     committed.push(value.clone());
//! });
//!
//! dispatcher.dispatch(Event::OptionsChanged(vec![OptionRecord::new(1, "Alpha")]))?;
//! dispatcher.dispatch(Event::ToggleAll)?;
//! dispatcher.dispatch(Event::Close)?;
//! drop(dispatcher);
//! assert_eq!(committed.len(), 1);
//! # Ok::<(), selectkit::SelectError>(())
//! ```

use std::collections::VecDeque;

use super::actions::Action;
use super::handler::{handle_event, Event};
use super::selection::SelectionValue;
use super::state::SelectState;
use crate::domain::Result;

/// FIFO of events waiting to be handled.
#[derive(Debug, Default)]
pub struct EventQueue {
    pending: VecDeque<Event>,
}

impl EventQueue {
    /// Queues `event` behind everything already pending.
    pub fn push(&mut self, event: Event) {
        self.pending.push_back(event);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    fn pop(&mut self) -> Option<Event> {
        self.pending.pop_front()
    }
}

/// Owns a control's state and delivers its commits to the owner.
pub struct Dispatcher<F>
where
    F: FnMut(&SelectionValue, &mut EventQueue),
{
    state: SelectState,
    on_commit: F,
    queue: EventQueue,
}

impl<F> Dispatcher<F>
where
    F: FnMut(&SelectionValue, &mut EventQueue),
{
    pub fn new(state: SelectState, on_commit: F) -> Self {
        Self {
            state,
            on_commit,
            queue: EventQueue::default(),
        }
    }

    #[must_use]
    pub const fn state(&self) -> &SelectState {
        &self.state
    }

    /// Queues an event without handling it.
    pub fn enqueue(&mut self, event: Event) {
        self.queue.push(event);
    }

    /// Queues `event` and handles everything pending.
    ///
    /// # Errors
    ///
    /// See [`Dispatcher::drain`].
    pub fn dispatch(&mut self, event: Event) -> Result<bool> {
        self.enqueue(event);
        self.drain()
    }

    /// Handles pending events in order until the queue is empty.
    ///
    /// Returns whether any handled event asked for a re-render.
    ///
    /// # Errors
    ///
    /// Stops at the first event the handler rejects and returns its error.
    /// Events queued behind it stay pending for the next drain.
    pub fn drain(&mut self) -> Result<bool> {
        let mut should_render = false;

        while let Some(event) = self.queue.pop() {
            let (render, actions) = handle_event(&mut self.state, &event)?;
            should_render |= render;

            for action in actions {
                match action {
                    Action::Commit(value) => {
                        tracing::debug!(value = ?value, "delivering commit");
                        (self.on_commit)(&value, &mut self.queue);
                    }
                }
            }
        }

        Ok(should_render)
    }

    #[must_use]
    pub fn into_state(self) -> SelectState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{SelectMode, ToggleValue};
    use crate::domain::{Identifier, OptionRecord};
    use crate::ui::Theme;

    fn catalog() -> Vec<OptionRecord> {
        vec![OptionRecord::new(1, "Alpha"), OptionRecord::new(2, "Beta")]
    }

    #[test]
    fn follow_up_events_run_after_current_event() {
        let mut log = Vec::new();
        let state = SelectState::new(SelectMode::Single, Theme::default());
        let mut dispatcher = Dispatcher::new(state, |value: &SelectionValue, queue: &mut EventQueue| {
            log.push(value.clone());
            queue.push(Event::Close);
        });

        dispatcher.dispatch(Event::OptionsChanged(catalog())).unwrap();
        dispatcher.dispatch(Event::Open).unwrap();
        dispatcher.dispatch(Event::QueryChanged("be".into())).unwrap();
        dispatcher.dispatch(Event::Toggle(ToggleValue::One("2".into()))).unwrap();

        let state = dispatcher.into_state();
        assert!(!state.is_open());
        assert_eq!(state.query(), "");
        assert_eq!(log, vec![SelectionValue::Single(Some(Identifier::Int(2)))]);
    }

    #[test]
    fn queued_events_keep_arrival_order() {
        let mut log = Vec::new();
        let state = SelectState::new(SelectMode::Multiple, Theme::default());
        let mut dispatcher = Dispatcher::new(state, |value: &SelectionValue, _: &mut EventQueue| {
            log.push(value.clone());
        });

        dispatcher.enqueue(Event::OptionsChanged(catalog()));
        dispatcher.enqueue(Event::Open);
        dispatcher.enqueue(Event::ToggleAll);
        dispatcher.enqueue(Event::Close);
        dispatcher.enqueue(Event::ToggleAll);
        dispatcher.enqueue(Event::Close);
        assert!(dispatcher.drain().unwrap());
        drop(dispatcher);

        assert_eq!(
            log,
            vec![
                SelectionValue::Multiple(vec![Identifier::Int(1), Identifier::Int(2)]),
                SelectionValue::Multiple(vec![]),
            ]
        );
    }

    #[test]
    fn rejected_event_leaves_rest_pending() {
        let state = SelectState::new(SelectMode::Single, Theme::default());
        let mut dispatcher = Dispatcher::new(state, |_: &SelectionValue, _: &mut EventQueue| {});

        dispatcher.enqueue(Event::ToggleAll);
        dispatcher.enqueue(Event::Open);
        assert!(dispatcher.drain().is_err());
        assert!(dispatcher.drain().unwrap());
        assert!(dispatcher.state().is_open());
    }
}
