//! Search bar component renderer.
//!
//! This module renders the search input box with a bordered frame and query
//! text display.

use crate::ui::helpers::{push_padding, truncate, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SearchBarInfo;

/// Horizontal margin for the search box (spaces on the left).
const SEARCH_BOX_MARGIN: usize = 1;

/// Renders the search input box.
///
/// Displays a 3-line bordered box containing the query, or the placeholder
/// dimmed while the query is empty.
///
/// # Layout
///
/// ```text
///  ┌───────────────────┐
///  │ Type to search    │
///  └───────────────────┘
/// ```
///
/// The box width is `cols - 2 * SEARCH_BOX_MARGIN`; the inner content width is
/// `box_width - 2` (accounting for left and right borders).
pub fn render_search_bar(out: &mut String, search: &SearchBarInfo, theme: &Theme, cols: usize) {
    let box_width = cols.saturating_sub(SEARCH_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let margin = " ".repeat(SEARCH_BOX_MARGIN);
    let border = Theme::fg(&theme.colors.search_bar_border);

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("┌{}┐", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');

    let (text, color) = if search.query.is_empty() {
        (&search.placeholder, &theme.colors.text_dim)
    } else {
        (&search.query, &theme.colors.text_normal)
    };
    let shown = truncate(&format!(" {text}"), inner_width);

    out.push_str(&margin);
    out.push_str(&border);
    out.push('│');
    out.push_str(&Theme::fg(color));
    out.push_str(&shown);
    push_padding(out, visible_width(&shown), inner_width);
    out.push_str(&border);
    out.push('│');
    out.push_str(Theme::reset());
    out.push('\n');

    out.push_str(&margin);
    out.push_str(&border);
    out.push_str(&format!("└{}┘", "─".repeat(inner_width)));
    out.push_str(Theme::reset());
    out.push('\n');
}
