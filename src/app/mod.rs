//! Application layer: the selection engine.
//!
//! This module holds the state machine shared by single- and multiple-select
//! controls. It sits between the control surface (which renders the view model
//! and captures gestures) and the owning application (which receives commits).
//!
//! # Architecture
//!
//! The engine follows a unidirectional data flow pattern:
//!
//! ```text
//! Gestures → Events → Event Handler → State Mutations → Actions → Owner callback
//!                                          │
//!                                          └──→ View Model → Control Surface
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Commit actions emitted by the event handler
//! - [`dispatcher`]: In-order event queue delivering commits to the owner
//! - [`filter`]: Case-insensitive substring search over the catalog
//! - [`handler`]: Event processing and commit timing
//! - [`modes`]: Select mode, open state and seed policy types
//! - [`selection`]: Single and multiple selection sets
//! - [`state`]: Control state container and view model computation
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{handle_event, Event, SelectMode, SelectState};
//! use selectkit::Theme;
//!
//! let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
//! let (_, actions) = handle_event(&mut state, &Event::Close)?;
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), selectkit::SelectError>(())
//! ```

pub mod actions;
pub mod dispatcher;
pub mod filter;
pub mod handler;
pub mod modes;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use dispatcher::{Dispatcher, EventQueue};
pub use handler::{handle_event, Event, InitialSelection, ToggleValue};
pub use modes::{OpenState, SeedPolicy, SelectMode};
pub use selection::{MultiSelection, Selection, SelectionValue, SingleSelection};
pub use state::{Presentation, SelectState, NO_OPTIONS_MESSAGE};
