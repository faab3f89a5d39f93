//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components. Everything writes into a `String` buffer instead of stdout so
//! the caller decides where the frame goes.
//!
//! # Features
//!
//! - **Match Highlighting**: Renders text with highlighted character ranges
//! - **Selection Awareness**: Restores row colors after each highlight
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```rust
//! use selectkit::ui::helpers::push_highlighted_text;
//! use selectkit::Theme;
//!
//! let theme = Theme::default();
//! let mut out = String::new();
//! push_highlighted_text(&mut out, "Alpha", &[(0, 2)], &theme, false);
//! assert!(out.ends_with("pha"));
//! ```

use crate::ui::theme::Theme;

/// Number of terminal cells a plain (escape-free) string occupies.
///
/// Counts characters, which is exact for the narrow scripts option labels
/// normally use.
#[must_use]
pub fn visible_width(text: &str) -> usize {
    text.chars().count()
}

/// Pads the current line out to `cols` given how much of it is already used.
pub fn push_padding(out: &mut String, used: usize, cols: usize) {
    out.push_str(&" ".repeat(cols.saturating_sub(used)));
}

/// Truncates `text` to at most `max` characters.
#[must_use]
pub fn truncate(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}

/// Renders text with highlighted character ranges for query matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use the match highlight colors.
///
/// # Parameters
///
/// * `out` - Buffer to append to
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `is_selected` - Whether the row is selected; its colors are re-applied after every highlight
///
/// # Character Indices
///
/// Ranges use character indices (not byte indices). Ranges past the end of
/// the text are clamped.
pub fn push_highlighted_text(
    out: &mut String,
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    is_selected: bool,
) {
    if ranges.is_empty() {
        out.push_str(text);
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        let start = start.clamp(current_pos, chars.len());
        let end = end.clamp(start, chars.len());

        out.extend(&chars[current_pos..start]);

        out.push_str(&Theme::fg(&theme.colors.match_highlight_fg));
        out.push_str(&Theme::bg(&theme.colors.match_highlight_bg));
        out.extend(&chars[start..end]);
        out.push_str(Theme::reset());

        if is_selected {
            out.push_str(&Theme::fg(&theme.colors.selection_fg));
            out.push_str(&Theme::bg(&theme.colors.selection_bg));
        } else {
            out.push_str(&Theme::fg(&theme.colors.text_normal));
        }

        current_pos = end;
    }

    out.extend(&chars[current_pos..]);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_ansi(text: &str) -> String {
        let mut plain = String::new();
        let mut in_escape = false;
        for c in text.chars() {
            match c {
                '\u{1b}' => in_escape = true,
                'm' if in_escape => in_escape = false,
                _ if in_escape => {}
                _ => plain.push(c),
            }
        }
        plain
    }

    #[test]
    fn highlighting_keeps_every_character() {
        let theme = Theme::default();
        let mut out = String::new();
        push_highlighted_text(&mut out, "Bäckerei", &[(1, 3), (6, 40)], &theme, true);
        assert_eq!(strip_ansi(&out), "Bäckerei");
        assert!(out.contains(&Theme::bg(&theme.colors.match_highlight_bg)));
    }

    #[test]
    fn unhighlighted_text_is_verbatim() {
        let mut out = String::new();
        push_highlighted_text(&mut out, "Beta", &[], &Theme::default(), false);
        assert_eq!(out, "Beta");
    }

    #[test]
    fn padding_fills_to_width() {
        let mut out = String::from("ab");
        push_padding(&mut out, visible_width("ab"), 5);
        assert_eq!(out, "ab   ");
        assert_eq!(truncate("héllo", 2), "hé");
    }
}
