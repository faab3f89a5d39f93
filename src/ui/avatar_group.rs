//! Stacked avatar badges with a surplus counter.
//!
//! An [`AvatarGroup`] shows at most `max` slots. When more avatars exist than
//! fit, the first slot becomes a `+N` surplus badge in the group's size and
//! color, and only the first avatars fill the remaining slots.
//!
//! # Example
//!
//! ```rust
//! use selectkit::ui::avatar::Avatar;
//! use selectkit::ui::avatar_group::{AvatarGroup, Slot};
//!
//! let group = AvatarGroup::new(vec![Avatar::new("Ann"), Avatar::new("Bob"), Avatar::new("Cy")])
//!     .with_max(2);
//! let slots = group.slots();
//! assert_eq!(slots[0], Slot::Surplus(2));
//! assert_eq!(slots.len(), 2);
//! ```

use serde::{Deserialize, Serialize};

use crate::ui::avatar::{badge, Avatar, AvatarColor, AvatarSize, AvatarStyle};

/// Slots shown when `max` is not set.
pub const DEFAULT_MAX: usize = 5;

/// Horizontal offset between neighbouring badges, in spacing units.
pub const OVERLAP_OFFSET: f32 = -0.5;

/// One rendered position of a group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<'a> {
    /// `+N` badge for the avatars that did not fit.
    Surplus(usize),
    Avatar(&'a Avatar),
}

/// A row of overlapping avatars.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AvatarGroup {
    pub avatars: Vec<Avatar>,
    /// Slot limit, surplus badge included. Values below 2 count as 2.
    #[serde(default = "default_max")]
    pub max: usize,
    /// Overrides the avatar count used for the surplus.
    #[serde(default)]
    pub total: Option<usize>,
    /// Size of the surplus badge.
    #[serde(default)]
    pub size: AvatarSize,
    /// Color of the surplus badge.
    #[serde(default)]
    pub color: AvatarColor,
}

const fn default_max() -> usize {
    DEFAULT_MAX
}

impl AvatarGroup {
    #[must_use]
    pub fn new(avatars: Vec<Avatar>) -> Self {
        Self {
            avatars,
            max: DEFAULT_MAX,
            total: None,
            size: AvatarSize::default(),
            color: AvatarColor::default(),
        }
    }

    #[must_use]
    pub fn with_max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    #[must_use]
    pub fn with_total(mut self, total: usize) -> Self {
        self.total = Some(total);
        self
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.unwrap_or(self.avatars.len())
    }

    /// How many avatars are shown and how many the surplus badge counts.
    fn split(&self) -> (usize, usize) {
        let max = self.max.max(2);
        let total = self.total();
        let shown_limit = if total <= max { max } else { max - 1 };
        let shown = self.avatars.len().min(shown_limit);
        let surplus = total.saturating_sub(shown);
        (shown, surplus)
    }

    /// Slots in display order; the surplus badge, if any, comes first.
    #[must_use]
    pub fn slots(&self) -> Vec<Slot<'_>> {
        let (shown, surplus) = self.split();
        let mut slots = Vec::with_capacity(shown + 1);
        if surplus > 0 {
            slots.push(Slot::Surplus(surplus));
        }
        slots.extend(self.avatars.iter().take(shown).map(Slot::Avatar));
        slots
    }

    /// Style of the surplus badge.
    #[must_use]
    pub const fn surplus_style(&self) -> AvatarStyle {
        AvatarStyle::resolve(self.size, self.color, false)
    }

    /// Renders every slot as a badge, left to right.
    #[must_use]
    pub fn render(&self) -> String {
        self.slots()
            .into_iter()
            .map(|slot| match slot {
                Slot::Surplus(count) => badge(&format!("+{count}"), self.color),
                Slot::Avatar(avatar) => avatar.render(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(n: usize) -> Vec<Avatar> {
        (0..n).map(|i| Avatar::new(format!("User {i}"))).collect()
    }

    #[test]
    fn everything_fits_without_surplus() {
        let group = AvatarGroup::new(people(3));
        assert_eq!(group.slots().len(), 3);
        assert!(!group.slots().iter().any(|slot| matches!(slot, Slot::Surplus(_))));
    }

    #[test]
    fn overflow_reserves_first_slot_for_surplus() {
        let group = AvatarGroup::new(people(7)).with_max(4);
        let slots = group.slots();
        assert_eq!(slots.len(), 4);
        assert_eq!(slots[0], Slot::Surplus(4));
    }

    #[test]
    fn explicit_total_drives_surplus() {
        let group = AvatarGroup::new(people(2)).with_total(10);
        assert_eq!(group.slots()[0], Slot::Surplus(8));
        assert_eq!(group.slots().len(), 3);
    }

    #[test]
    fn max_below_two_is_clamped() {
        let group = AvatarGroup::new(people(3)).with_max(0);
        assert_eq!(group.slots(), vec![Slot::Surplus(2), Slot::Avatar(&group.avatars[0])]);
    }

    #[test]
    fn surplus_badge_uses_group_style() {
        let group = AvatarGroup {
            size: AvatarSize::Large,
            color: AvatarColor::Orange,
            ..AvatarGroup::new(people(9))
        };
        assert_eq!(group.surplus_style().width, 40);
        assert!(group.render().contains(" +5 "));
    }
}
