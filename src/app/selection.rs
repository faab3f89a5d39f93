//! Selection sets for single and multiple mode.
//!
//! [`Selection`] holds the chosen id(s) of a control. The two modes share no
//! operations beyond inspection:
//!
//! - [`SingleSelection`] resolves raw gesture values against the catalog
//!   under canonical equality and falls back to "no selection" when nothing
//!   matches.
//! - [`MultiSelection`] is an id set with the select-all toggle. Select-all
//!   replaces the selection with the visible ids; unselect-all clears
//!   everything, visible or not.
//!
//! Neither type validates ids against the catalog. Ids seeded before the
//! catalog loads are kept as-is.

use serde::{Deserialize, Serialize};

use super::modes::{SeedPolicy, SelectMode};
use crate::domain::{Identifier, OptionRecord};

/// Value reported to the owning application on commit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectionValue {
    /// Single-mode value; `None` is the empty sentinel (cleared).
    Single(Option<Identifier>),
    /// Multiple-mode snapshot, in selection order.
    Multiple(Vec<Identifier>),
}

/// Current selection of a single-select.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SingleSelection(Option<Identifier>);

impl SingleSelection {
    #[must_use]
    pub const fn current(&self) -> Option<&Identifier> {
        self.0.as_ref()
    }

    /// Resolves `raw` against the catalog and stores the result.
    ///
    /// The first catalog option whose id [matches](Identifier::matches) `raw`
    /// wins, and its catalog-typed id is stored, so `"3"` resolves to `Int(3)`
    /// when the catalog declares the id as an integer. String ids compare
    /// exactly, so `"3"` never resolves to a `"03"` option. No match clears
    /// the selection.
    /// Returns the stored value.
    pub fn select(&mut self, catalog: &[OptionRecord], raw: &Identifier) -> Option<Identifier> {
        self.0 = catalog
            .iter()
            .find(|option| option.id.matches(raw))
            .map(|option| option.id.clone());
        self.0.clone()
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    pub fn seed(&mut self, initial: Option<Identifier>) {
        self.0 = initial;
    }
}

/// Current selection of a multiple-select.
///
/// Kept in insertion order, so snapshots are deterministic. An id that
/// [matches](Identifier::matches) one already selected is not added again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MultiSelection(Vec<Identifier>);

impl MultiSelection {
    #[must_use]
    pub fn contains(&self, id: &Identifier) -> bool {
        self.0.iter().any(|selected| selected.matches(id))
    }

    fn insert(&mut self, id: Identifier) {
        if !self.contains(&id) {
            self.0.push(id);
        }
    }

    fn replace(&mut self, ids: impl IntoIterator<Item = Identifier>) {
        self.0.clear();
        for id in ids {
            self.insert(id);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `true` iff `visible` is non-empty and every visible id is selected.
    #[must_use]
    pub fn is_all_selected<'a, I>(&self, visible: I) -> bool
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let mut any = false;
        for id in visible {
            if !self.contains(id) {
                return false;
            }
            any = true;
        }
        any
    }

    /// Select-all / unselect-all over the visible ids.
    ///
    /// When every visible id is already selected the whole selection is
    /// cleared, including ids that are not visible. Otherwise the selection
    /// becomes exactly the visible ids. An empty `visible` is a no-op.
    /// Returns `true` if the selection changed.
    pub fn toggle_all(&mut self, visible: &[&Identifier]) -> bool {
        if visible.is_empty() {
            return false;
        }

        let before = self.0.clone();
        if self.is_all_selected(visible.iter().copied()) {
            self.0.clear();
        } else {
            self.replace(visible.iter().map(|id| (*id).clone()));
        }
        before != self.0
    }

    /// Stores a surface-produced id list as the new selection.
    pub fn set(&mut self, ids: Vec<Identifier>) {
        self.replace(ids);
    }

    /// Combines a new initial-selection input with the current selection.
    pub fn seed(&mut self, initial: Vec<Identifier>, policy: SeedPolicy) {
        match policy {
            SeedPolicy::Merge => {
                for id in initial {
                    self.insert(id);
                }
            }
            SeedPolicy::Replace => self.replace(initial),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> Vec<Identifier> {
        self.0.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identifier> {
        self.0.iter()
    }
}

/// Selection of either mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(SingleSelection),
    Multiple(MultiSelection),
}

impl Selection {
    /// Creates an empty selection for `mode`.
    #[must_use]
    pub fn new(mode: SelectMode) -> Self {
        match mode {
            SelectMode::Single => Self::Single(SingleSelection::default()),
            SelectMode::Multiple => Self::Multiple(MultiSelection::default()),
        }
    }

    #[must_use]
    pub const fn mode(&self) -> SelectMode {
        match self {
            Self::Single(_) => SelectMode::Single,
            Self::Multiple(_) => SelectMode::Multiple,
        }
    }

    #[must_use]
    pub fn contains(&self, id: &Identifier) -> bool {
        match self {
            Self::Single(single) => single.current().is_some_and(|current| current.matches(id)),
            Self::Multiple(multi) => multi.contains(id),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(single) => single.current().is_none(),
            Self::Multiple(multi) => multi.is_empty(),
        }
    }

    /// Snapshot of the selection as a commit value.
    #[must_use]
    pub fn value(&self) -> SelectionValue {
        match self {
            Self::Single(single) => SelectionValue::Single(single.current().cloned()),
            Self::Multiple(multi) => SelectionValue::Multiple(multi.snapshot()),
        }
    }

    /// Selected ids in selection order (zero or one in single mode).
    #[must_use]
    pub fn ids(&self) -> Vec<Identifier> {
        match self {
            Self::Single(single) => single.current().cloned().into_iter().collect(),
            Self::Multiple(multi) => multi.snapshot(),
        }
    }
}
