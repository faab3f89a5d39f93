//! Footer component renderer.
//!
//! This module renders the helper text below the control.

use crate::ui::helpers::{push_padding, truncate, visible_width};
use crate::ui::theme::Theme;

/// Renders the helper text line with dimmed styling.
///
/// Text wider than the terminal is truncated so the layout stays intact.
pub fn render_footer(out: &mut String, helper_text: &str, theme: &Theme, cols: usize) {
    let text = truncate(helper_text, cols);

    out.push_str(&Theme::fg(&theme.colors.text_dim));
    out.push_str(&text);
    push_padding(out, visible_width(&text), cols);
    out.push_str(Theme::reset());
    out.push('\n');
}
