//! Top-level rendering coordinator.
//!
//! This module provides the main rendering entry point, coordinating view model
//! computation and delegation to UI components. It picks the layout from the
//! open state and returns the finished frame as a `String`.
//!
//! # Architecture
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `SelectState` into `SelectViewModel`
//! 2. **Component Rendering**: Delegate to specialized component renderers
//!
//! # Example
//!
//! ```rust
//! use selectkit::app::{SelectMode, SelectState};
//! use selectkit::{render, OptionRecord, Theme};
//!
//! let mut state = SelectState::new(SelectMode::Multiple, Theme::default());
//! state.set_catalog(vec![OptionRecord::new(1, "Alpha")]);
//! state.open();
//! assert!(render(&state).contains("Select All"));
//! ```

use crate::app::SelectState;
use crate::ui::components;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectViewModel;

/// Width in columns used by [`render`].
pub const DEFAULT_WIDTH: usize = 48;

/// Renders the control to an ANSI-styled string at [`DEFAULT_WIDTH`].
#[must_use]
pub fn render(state: &SelectState) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, &state.theme, DEFAULT_WIDTH)
}

/// Renders a view model with the layout matching its open state.
///
/// - Closed: label, value line, helper text
/// - Open: the same plus the option menu (search box, select-all row,
///   option rows or empty state)
///
/// Every line is padded to `cols` and terminated with `\n`.
#[must_use]
pub fn render_viewmodel(vm: &SelectViewModel, theme: &Theme, cols: usize) -> String {
    let mut out = String::new();

    if vm.is_open {
        components::render_open(&mut out, vm, theme, cols);
    } else {
        components::render_closed(&mut out, vm, theme, cols);
    }

    out
}
