//! Empty state component renderer.
//!
//! This module renders the message displayed in place of option rows when no
//! option matches the query or the catalog is empty.

use crate::ui::helpers::{push_padding, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message centered on its line.
///
/// # Layout
///
/// ```text
/// [left padding] No options [right padding]
/// ```
///
/// Padding is split evenly on both sides. If the width cannot evenly divide,
/// the right padding is slightly larger.
pub fn render_empty_state(out: &mut String, empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = visible_width(&empty.message);
    let msg_padding = cols.saturating_sub(msg_len) / 2;

    out.push_str(&Theme::fg(&theme.colors.empty_state_fg));
    out.push_str(&" ".repeat(msg_padding));
    out.push_str(&empty.message);
    push_padding(out, msg_padding + msg_len, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
