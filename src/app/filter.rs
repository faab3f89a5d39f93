//! Search filtering over a catalog.
//!
//! The visible set of a control is the catalog filtered by the current query:
//! an option stays visible when its label contains the query as a substring,
//! ignoring case. An empty query keeps every option. Filtering never adds or
//! reorders options; it returns catalog indices in catalog order.
//!
//! Case folding is per character (`char::to_lowercase`), applied identically
//! to label and query, so [`contains_text`] and [`match_ranges`] always agree.

use crate::domain::OptionRecord;

fn fold(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` when `label` contains `query`, ignoring case.
///
/// # Example
///
/// ```
/// use selectkit::app::filter::contains_text;
///
/// assert!(contains_text("Alpha", "LPH"));
/// assert!(contains_text("Alpha", ""));
/// assert!(!contains_text("Beta", "alpha"));
/// ```
#[must_use]
pub fn contains_text(label: &str, query: &str) -> bool {
    query.is_empty() || fold(label).contains(&fold(query))
}

/// Computes the visible subset of `catalog` for `query`.
///
/// Returns indices into `catalog`, ascending. Runs a full linear scan.
#[must_use]
pub fn visible(catalog: &[OptionRecord], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..catalog.len()).collect();
    }

    let needle = fold(query);
    catalog
        .iter()
        .enumerate()
        .filter(|(_, option)| fold(&option.label).contains(&needle))
        .map(|(index, _)| index)
        .collect()
}

/// Character ranges of `label` matched by `query`, for highlighting.
///
/// Each tuple is `(start, end)` in character indices of the original label,
/// end exclusive. Occurrences are found left to right without overlap.
/// Returns an empty vector for an empty query or no match.
///
/// # Example
///
/// ```
/// use selectkit::app::filter::match_ranges;
///
/// assert_eq!(match_ranges("Banana", "AN"), vec![(1, 3), (3, 5)]);
/// ```
#[must_use]
pub fn match_ranges(label: &str, query: &str) -> Vec<(usize, usize)> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return vec![];
    }

    // Folded characters paired with the index of the label char they came from.
    let mut folded = Vec::new();
    let mut origin = Vec::new();
    for (index, c) in label.chars().enumerate() {
        for lower in c.to_lowercase() {
            folded.push(lower);
            origin.push(index);
        }
    }

    let mut ranges = Vec::new();
    let mut pos = 0;
    while pos + needle.len() <= folded.len() {
        if folded[pos..pos + needle.len()] == needle[..] {
            let start = origin[pos];
            let end = origin[pos + needle.len() - 1] + 1;
            ranges.push((start, end));
            pos += needle.len();
        } else {
            pos += 1;
        }
    }

    ranges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<OptionRecord> {
        vec![
            OptionRecord::new(1, "Alpha"),
            OptionRecord::new(2, "Beta"),
            OptionRecord::new(3, "Gamma"),
            OptionRecord::new(4, "delta"),
        ]
    }

    #[test]
    fn empty_query_is_identity() {
        assert_eq!(visible(&catalog(), ""), vec![0, 1, 2, 3]);
        assert!(visible(&[], "").is_empty());
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let catalog = catalog();
        assert_eq!(visible(&catalog, "A"), vec![0, 1, 2, 3]);
        assert_eq!(visible(&catalog, "ALPHA"), vec![0]);
        assert_eq!(visible(&catalog, "elt"), vec![3]);
        assert!(visible(&catalog, "zeta").is_empty());
    }

    #[test]
    fn every_visible_label_contains_query() {
        let catalog = catalog();
        for query in ["a", "mm", "ET", "x", "ta"] {
            for index in visible(&catalog, query) {
                assert!(index < catalog.len());
                assert!(catalog[index].label.to_lowercase().contains(&query.to_lowercase()));
            }
        }
    }

    #[test]
    fn match_ranges_map_back_to_label_chars() {
        assert_eq!(match_ranges("Alpha", "a"), vec![(0, 1), (4, 5)]);
        assert_eq!(match_ranges("Ünïcode", "ïc"), vec![(2, 4)]);
        assert!(match_ranges("Alpha", "").is_empty());
        assert!(match_ranges("Alpha", "z").is_empty());
    }
}
