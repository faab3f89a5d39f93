//! Option records and catalog normalization.
//!
//! A catalog is the ordered list of candidate options a select control offers.
//! Callers rarely hold `{id, label}` pairs directly, so this module builds
//! catalogs from arbitrary records in three ways:
//!
//! - [`normalize`]: JSON records plus a [`FieldMap`] naming the id and label
//!   fields. Missing fields read as the text `"undefined"`.
//! - [`normalize_strict`]: same input, but a missing field is an error.
//! - [`normalize_with`]: typed records plus accessor functions.
//!
//! None of them deduplicate ids or reorder records.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::{Result, SelectError};
use super::identifier::{text_of, Identifier};

/// Text produced when a mapped field is absent from a raw record.
pub const MISSING_FIELD_TEXT: &str = "undefined";

/// One selectable option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    pub id: Identifier,
    pub label: String,
}

impl OptionRecord {
    /// Creates an option from anything convertible to an [`Identifier`].
    ///
    /// # Example
    ///
    /// ```
    /// use selectkit::OptionRecord;
    ///
    /// let option = OptionRecord::new(1, "Alpha");
    /// assert_eq!(option.label, "Alpha");
    /// ```
    pub fn new(id: impl Into<Identifier>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered candidate list. Insertion order is display order.
pub type Catalog = Vec<OptionRecord>;

/// Names the fields of a raw record that supply the id and the label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldMap {
    /// Field holding the option id. Default: `"id"`.
    pub id_field: String,
    /// Field holding the display label. Default: `"label"`.
    pub label_field: String,
}

impl Default for FieldMap {
    fn default() -> Self {
        Self {
            id_field: "id".to_string(),
            label_field: "label".to_string(),
        }
    }
}

impl FieldMap {
    #[must_use]
    pub fn new(id_field: impl Into<String>, label_field: impl Into<String>) -> Self {
        Self {
            id_field: id_field.into(),
            label_field: label_field.into(),
        }
    }
}

/// Normalizes raw JSON records into a catalog.
///
/// Integral id values keep their integer type; every other id and every label
/// is coerced to text. A field missing from a record (or a record that is not
/// an object) yields [`MISSING_FIELD_TEXT`] instead of an error.
///
/// # Example
///
/// ```
/// use selectkit::{normalize, FieldMap, Identifier};
/// use serde_json::json;
///
/// let raw = vec![json!({"value": 3, "text": "Three"}), json!({"text": "Orphan"})];
/// let catalog = normalize(&raw, &FieldMap::new("value", "text"));
/// assert_eq!(catalog[0].id, Identifier::Int(3));
/// assert_eq!(catalog[1].id, Identifier::from("undefined"));
/// ```
#[must_use]
pub fn normalize(raw: &[Value], fields: &FieldMap) -> Catalog {
    let _span = tracing::debug_span!("normalize", records = raw.len()).entered();

    raw.iter()
        .map(|record| OptionRecord {
            id: record
                .get(&fields.id_field)
                .map_or_else(|| Identifier::from(MISSING_FIELD_TEXT), Identifier::from_json),
            label: record
                .get(&fields.label_field)
                .map_or_else(|| MISSING_FIELD_TEXT.to_string(), text_of),
        })
        .collect()
}

/// Normalizes raw JSON records, failing on the first missing field.
///
/// # Errors
///
/// Returns [`SelectError::MissingField`] naming the record index and field.
pub fn normalize_strict(raw: &[Value], fields: &FieldMap) -> Result<Catalog> {
    raw.iter()
        .enumerate()
        .map(|(index, record)| {
            let field_of = |name: &String| {
                record.get(name).ok_or_else(|| SelectError::MissingField {
                    index,
                    field: name.clone(),
                })
            };
            Ok(OptionRecord {
                id: Identifier::from_json(field_of(&fields.id_field)?),
                label: text_of(field_of(&fields.label_field)?),
            })
        })
        .collect()
}

/// Builds a catalog from typed records through an accessor pair.
///
/// # Example
///
/// ```
/// use selectkit::{normalize_with, Identifier};
///
/// struct User { uid: u32, name: &'static str }
///
/// let users = [User { uid: 7, name: "Ada" }];
/// let catalog = normalize_with(&users, |u| Identifier::from(u.uid), |u| u.name.to_string());
/// assert_eq!(catalog[0].label, "Ada");
/// ```
pub fn normalize_with<T, I, L>(items: &[T], id_of: I, label_of: L) -> Catalog
where
    I: Fn(&T) -> Identifier,
    L: Fn(&T) -> String,
{
    items
        .iter()
        .map(|item| OptionRecord {
            id: id_of(item),
            label: label_of(item),
        })
        .collect()
}

/// Parses a JSON array of records and normalizes it leniently.
///
/// # Errors
///
/// Returns [`SelectError::Json`] if the text is not a JSON array.
pub fn parse_options(json: &str, fields: &FieldMap) -> Result<Catalog> {
    let raw: Vec<Value> = serde_json::from_str(json)?;
    Ok(normalize(&raw, fields))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lbl_map() -> FieldMap {
        FieldMap::new("id", "lbl")
    }

    #[test]
    fn normalize_preserves_order_and_duplicates() {
        let raw = vec![
            json!({"id": 2, "lbl": "Beta"}),
            json!({"id": 1, "lbl": "Alpha"}),
            json!({"id": 2, "lbl": "Beta again"}),
        ];
        let catalog = normalize(&raw, &lbl_map());
        let labels: Vec<&str> = catalog.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, ["Beta", "Alpha", "Beta again"]);
    }

    #[test]
    fn missing_fields_read_as_undefined() {
        let raw = vec![json!({"lbl": "No id"}), json!("not an object")];
        let catalog = normalize(&raw, &lbl_map());
        assert_eq!(catalog[0].id, Identifier::from("undefined"));
        assert_eq!(catalog[0].label, "No id");
        assert_eq!(catalog[1].label, "undefined");
    }

    #[test]
    fn labels_are_coerced_to_text() {
        let raw = vec![json!({"id": "a", "lbl": 10}), json!({"id": "b", "lbl": null})];
        let catalog = normalize(&raw, &lbl_map());
        assert_eq!(catalog[0].label, "10");
        assert_eq!(catalog[1].label, "null");
    }

    #[test]
    fn strict_normalization_reports_missing_field() {
        let raw = vec![json!({"id": 1, "lbl": "ok"}), json!({"id": 2})];
        let err = normalize_strict(&raw, &lbl_map()).unwrap_err();
        match err {
            SelectError::MissingField { index, field } => {
                assert_eq!(index, 1);
                assert_eq!(field, "lbl");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn parse_options_rejects_non_arrays() {
        assert!(parse_options("{\"id\": 1}", &FieldMap::default()).is_err());
        let catalog = parse_options(r#"[{"id": 1, "label": "One"}]"#, &FieldMap::default()).unwrap();
        assert_eq!(catalog, vec![OptionRecord::new(1, "One")]);
    }
}
