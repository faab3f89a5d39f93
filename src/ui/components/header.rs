//! Header component renderer.
//!
//! This module renders the control label and the closed-control value line
//! with the selected summary, the clear affordance and the open indicator.

use crate::ui::helpers::{push_padding, truncate, visible_width};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::SelectViewModel;

/// Shown on the value line while nothing is selected.
pub const NOTHING_SELECTED: &str = "Nothing selected";

/// Clear affordance appended to the value line.
const CLEAR_MARK: &str = " [x]";

/// Renders the label line, if the control has a label.
///
/// # Layout
///
/// ```text
/// Label * (disabled)
/// ```
///
/// The required marker uses `error_fg`. When the theme defines `label_bg`, the
/// whole line is painted with it.
pub fn render_label(out: &mut String, vm: &SelectViewModel, theme: &Theme, cols: usize) {
    let Some(label) = &vm.label else {
        return;
    };

    out.push_str(Theme::bold());
    out.push_str(&Theme::fg(&theme.colors.label_fg));
    if let Some(bg) = &theme.colors.label_bg {
        out.push_str(&Theme::bg(bg));
    }

    let mut used = visible_width(label);
    out.push_str(label);

    if vm.required {
        out.push_str(&Theme::fg(&theme.colors.error_fg));
        out.push_str(" *");
        out.push_str(&Theme::fg(&theme.colors.label_fg));
        used += 2;
    }

    if vm.disabled {
        out.push_str(" (disabled)");
        used += 11;
    }

    push_padding(out, used, cols);
    out.push_str(Theme::reset());
    out.push('\n');
}

/// Renders the value line: summary of the selection and affordances.
///
/// # Layout
///
/// ```text
/// ▾ Alpha, Beta                        [x]
/// ```
///
/// The summary is truncated to fit between the open indicator and the clear
/// mark. An empty selection renders [`NOTHING_SELECTED`] dimmed.
pub fn render_value_line(out: &mut String, vm: &SelectViewModel, theme: &Theme, cols: usize) {
    let indicator = if vm.is_open { "▴ " } else { "▾ " };
    let clear_len = if vm.show_clear { CLEAR_MARK.len() } else { 0 };
    let room = cols.saturating_sub(2 + clear_len);

    out.push_str(&Theme::fg(&theme.colors.primary));
    out.push_str(indicator);

    let text = if vm.summary.is_empty() {
        out.push_str(Theme::dim());
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        truncate(NOTHING_SELECTED, room)
    } else {
        out.push_str(&Theme::fg(&theme.colors.text_normal));
        truncate(&vm.summary, room)
    };

    let used = 2 + visible_width(&text);
    out.push_str(&text);
    out.push_str(Theme::reset());
    push_padding(out, used + clear_len, cols);

    if vm.show_clear {
        out.push_str(&Theme::fg(&theme.colors.text_dim));
        out.push_str(CLEAR_MARK);
        out.push_str(Theme::reset());
    }
    out.push('\n');
}
