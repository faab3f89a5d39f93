//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for the parts of a
//! select control. Each component appends whole lines to a `String` buffer.
//!
//! # Components
//!
//! - [`header`]: Label line and the value line with the selected summary
//! - [`search`]: Search input box (border, query text)
//! - [`options`]: Placeholder hint, select-all row and option rows
//! - [`empty`]: Empty state message for no visible options
//! - [`footer`]: Helper text
//!
//! # Layout Modes
//!
//! - [`render_closed`]: Label + Value line + Helper text
//! - [`render_open`]: Label + Value line + Border + Search + Options + Border + Helper text

mod empty;
mod footer;
mod header;
mod options;
mod search;

pub use empty::render_empty_state;
pub use header::NOTHING_SELECTED;

use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectViewModel;

use footer::render_footer;
use header::{render_label, render_value_line};
use options::{render_option_rows, render_placeholder_row, render_select_all};
use search::render_search_bar;

/// Renders a horizontal border line across the full width.
///
/// Used to separate the option menu from the value line and the helper text.
fn render_border(out: &mut String, color: &str, cols: usize) {
    out.push_str(&Theme::fg(color));
    out.push_str(&"─".repeat(cols));
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the closed control.
///
/// ```text
/// [Label]
/// [Value line]
/// [Helper text]
/// ```
pub fn render_closed(out: &mut String, vm: &SelectViewModel, theme: &Theme, cols: usize) {
    render_label(out, vm, theme, cols);
    render_value_line(out, vm, theme, cols);
    if let Some(helper) = &vm.helper_text {
        render_footer(out, helper, theme, cols);
    }
}

/// Renders the control with its option menu showing.
///
/// ```text
/// [Label]
/// [Value line]
/// [Border]
/// [Search Bar - 3 lines, when present]
/// [Placeholder hint, when set]
/// [Select-all row, multiple mode]
/// [Option rows | Empty state]
/// [Border]
/// [Helper text]
/// ```
pub fn render_open(out: &mut String, vm: &SelectViewModel, theme: &Theme, cols: usize) {
    render_label(out, vm, theme, cols);
    render_value_line(out, vm, theme, cols);
    render_border(out, &theme.colors.border, cols);

    if let Some(search) = &vm.search_bar {
        render_search_bar(out, search, theme, cols);
    }
    if let Some(placeholder) = &vm.placeholder {
        render_placeholder_row(out, placeholder, theme, cols);
    }
    if let Some(select_all) = &vm.select_all {
        render_select_all(out, select_all, theme, cols);
    }

    if let Some(empty) = &vm.empty_state {
        render_empty_state(out, empty, theme, cols);
    } else {
        render_option_rows(out, &vm.visible_options, vm.mode, theme, cols);
    }

    render_border(out, &theme.colors.border, cols);
    if let Some(helper) = &vm.helper_text {
        render_footer(out, helper, theme, cols);
    }
}
