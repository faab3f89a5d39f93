//! Option list component renderer.
//!
//! This module renders the select-all row and one row per visible option,
//! with a checkbox (multiple mode) or radio marker (single mode), selection
//! colors and query match highlighting.

use crate::app::SelectMode;
use crate::ui::helpers::{self, push_padding, truncate, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{OptionRow, SelectAllInfo};

/// Width of every row marker (`[x] `, `( ) `).
const MARKER_WIDTH: usize = 4;

fn marker(mode: SelectMode, checked: bool) -> &'static str {
    match (mode, checked) {
        (SelectMode::Multiple, true) => "[x] ",
        (SelectMode::Multiple, false) => "[ ] ",
        (SelectMode::Single, true) => "(•) ",
        (SelectMode::Single, false) => "( ) ",
    }
}

/// Renders the disabled hint row shown above the options.
pub fn render_placeholder_row(out: &mut String, placeholder: &str, theme: &Theme, cols: usize) {
    let text = truncate(placeholder, cols);
    out.push_str(Theme::dim());
    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&text);
    push_padding(out, visible_width(&text), cols);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the select-all row ("Select All" / "Unselect All").
pub fn render_select_all(out: &mut String, info: &SelectAllInfo, theme: &Theme, cols: usize) {
    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.primary));
    out.push_str(marker(SelectMode::Multiple, info.checked));
    out.push_str(&info.label);
    push_padding(out, MARKER_WIDTH + visible_width(&info.label), cols);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders all option rows in order.
pub fn render_option_rows(out: &mut String, rows: &[OptionRow], mode: SelectMode, theme: &Theme, cols: usize) {
    for row in rows {
        render_option_row(out, row, mode, theme, cols);
    }
}

/// Renders a single option row.
///
/// # Styling Precedence
///
/// 1. Match highlights
/// 2. Selection colors (if `is_selected`)
/// 3. Normal text color
///
/// The row is padded to the full width so the selection background covers
/// the whole line. Labels too long for the line are truncated, which drops
/// any highlight past the cut.
fn render_option_row(out: &mut String, row: &OptionRow, mode: SelectMode, theme: &Theme, cols: usize) {
    if row.is_selected {
        out.push_str(&Theme::fg(&theme.colors.selection_fg));
        out.push_str(&Theme::bg(&theme.colors.selection_bg));
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
    }

    out.push_str(marker(mode, row.is_selected));

    let label = truncate(&row.label, cols.saturating_sub(MARKER_WIDTH));
    helpers::push_highlighted_text(out, &label, &row.highlight_ranges, theme, row.is_selected);

    push_padding(out, MARKER_WIDTH + visible_width(&label), cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
