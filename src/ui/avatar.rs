//! Avatar badges: size/color style tables and initials rendering.
//!
//! An [`Avatar`] resolves to an [`AvatarStyle`] (pixel metrics for surfaces
//! that lay out graphically) and renders as a colored initials badge for
//! terminal surfaces.
//!
//! # Example
//!
//! ```rust
//! use selectkit::ui::avatar::{Avatar, AvatarColor, AvatarSize};
//!
//! let avatar = Avatar::new("Ada Lovelace").with_size(AvatarSize::Small);
//! assert_eq!(avatar.initials(), "AL");
//! assert_eq!(avatar.style().width, 24);
//! assert_eq!(avatar.style().colors.background, AvatarColor::Purple.palette().background);
//! ```

use serde::{Deserialize, Serialize};

use crate::ui::theme::Theme;

/// Badge size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
}

/// Badge color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarColor {
    Green,
    Orange,
    Red,
    #[default]
    Purple,
}

/// Pixel metrics of one size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeMetrics {
    pub width: u32,
    pub height: u32,
    pub font_size_px: u32,
    pub line_height_px: u32,
}

/// Background and foreground hex colors of one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub background: &'static str,
    pub foreground: &'static str,
}

impl AvatarSize {
    #[must_use]
    pub const fn metrics(self) -> SizeMetrics {
        match self {
            Self::Small => SizeMetrics { width: 24, height: 24, font_size_px: 12, line_height_px: 18 },
            Self::Medium => SizeMetrics { width: 32, height: 32, font_size_px: 14, line_height_px: 20 },
            Self::Large => SizeMetrics { width: 40, height: 40, font_size_px: 18, line_height_px: 28 },
        }
    }

    /// Padding around icon content.
    #[must_use]
    pub const fn icon_padding_px(self) -> u32 {
        match self {
            Self::Small => 4,
            Self::Medium | Self::Large => 3,
        }
    }
}

impl AvatarColor {
    #[must_use]
    pub const fn palette(self) -> ColorPalette {
        match self {
            Self::Green => ColorPalette { background: "#E9FFF2", foreground: "#4A8362" },
            Self::Orange => ColorPalette { background: "#FFE8CC", foreground: "#D07306" },
            Self::Red => ColorPalette { background: "#FFDCE0", foreground: "#CE4553" },
            Self::Purple => ColorPalette { background: "#F6DFFF", foreground: "#4D1A69" },
        }
    }
}

/// Fully resolved style of one badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AvatarStyle {
    pub width: u32,
    pub height: u32,
    pub font_size_px: u32,
    pub line_height_px: u32,
    /// Set for icon avatars only.
    pub padding_px: Option<u32>,
    pub colors: ColorPalette,
}

impl AvatarStyle {
    #[must_use]
    pub const fn resolve(size: AvatarSize, color: AvatarColor, is_icon: bool) -> Self {
        let metrics = size.metrics();
        Self {
            width: metrics.width,
            height: metrics.height,
            font_size_px: metrics.font_size_px,
            line_height_px: metrics.line_height_px,
            padding_px: if is_icon { Some(size.icon_padding_px()) } else { None },
            colors: color.palette(),
        }
    }
}

/// A user or entity badge.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Avatar {
    /// Display name, or the glyph itself for icon avatars.
    pub content: String,
    #[serde(default)]
    pub size: AvatarSize,
    #[serde(default)]
    pub color: AvatarColor,
    /// Renders `content` verbatim instead of its initials.
    #[serde(default)]
    pub is_icon: bool,
}

impl Avatar {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            size: AvatarSize::default(),
            color: AvatarColor::default(),
            is_icon: false,
        }
    }

    pub fn icon(glyph: impl Into<String>) -> Self {
        Self {
            is_icon: true,
            ..Self::new(glyph)
        }
    }

    #[must_use]
    pub fn with_size(mut self, size: AvatarSize) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: AvatarColor) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub const fn style(&self) -> AvatarStyle {
        AvatarStyle::resolve(self.size, self.color, self.is_icon)
    }

    /// Uppercased first letters of the first and last words of `content`.
    ///
    /// A single word yields one letter; blank content yields an empty string.
    /// Icon avatars return their content unchanged.
    #[must_use]
    pub fn initials(&self) -> String {
        if self.is_icon {
            return self.content.clone();
        }

        let mut words = self.content.split_whitespace();
        let first = words.next().and_then(|word| word.chars().next());
        let last = words.last().and_then(|word| word.chars().next());

        first
            .into_iter()
            .chain(last)
            .flat_map(char::to_uppercase)
            .collect()
    }

    /// Renders the badge as ` AL ` in the avatar's colors.
    #[must_use]
    pub fn render(&self) -> String {
        badge(&self.initials(), self.color)
    }
}

/// Colors `text` with a palette, padded by one space on each side.
pub(crate) fn badge(text: &str, color: AvatarColor) -> String {
    let palette = color.palette();
    format!(
        "{}{}{} {text} {}",
        Theme::bold(),
        Theme::bg(palette.background),
        Theme::fg(palette.foreground),
        Theme::reset()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_medium_purple() {
        let style = Avatar::new("x").style();
        assert_eq!((style.width, style.font_size_px, style.line_height_px), (32, 14, 20));
        assert_eq!(style.colors.foreground, "#4D1A69");
        assert_eq!(style.padding_px, None);
    }

    #[test]
    fn icon_padding_depends_on_size() {
        assert_eq!(Avatar::icon("★").with_size(AvatarSize::Small).style().padding_px, Some(4));
        assert_eq!(Avatar::icon("★").with_size(AvatarSize::Large).style().padding_px, Some(3));
    }

    #[test]
    fn initials_use_first_and_last_words() {
        assert_eq!(Avatar::new("grace brewster hopper").initials(), "GH");
        assert_eq!(Avatar::new("  linus ").initials(), "L");
        assert_eq!(Avatar::new("").initials(), "");
        assert_eq!(Avatar::icon("★").initials(), "★");
    }

    #[test]
    fn badge_uses_palette_colors() {
        let rendered = Avatar::new("Ada").with_color(AvatarColor::Green).render();
        assert!(rendered.contains(&Theme::bg("#E9FFF2")));
        assert!(rendered.contains(" A "));
    }

    #[test]
    fn avatar_deserializes_with_defaults() {
        let avatar: Avatar = serde_json::from_str(r#"{"content":"Ada","color":"red"}"#).unwrap();
        assert_eq!(avatar.size, AvatarSize::Medium);
        assert_eq!(avatar.color, AvatarColor::Red);
    }
}
