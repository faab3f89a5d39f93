//! Option identifiers and canonical-value matching.
//!
//! Option ids arrive either as integers or as strings, and a rendering surface
//! hands gesture payloads back as text (`"3"` for an option whose id is `3`).
//! [`Identifier::matches`] is the canonical-value comparison used wherever a
//! gesture value meets a catalog or selection id: ids of the same type compare
//! exactly, and numeric coercion applies only across types.
//!
//! The derived `PartialEq`, `Eq` and `Hash` are structural (type and value),
//! so `"03"` and `"3"` are distinct ids and so are `3` and `"3"`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// An option id, either integer- or string-typed.
///
/// The variant records the id's declared type. Structural equality keeps it;
/// [`Identifier::matches`] bridges it.
///
/// # Example
///
/// ```
/// use selectkit::Identifier;
///
/// assert!(Identifier::Int(3).matches(&Identifier::from("3")));
/// assert!(Identifier::Int(3).matches(&Identifier::from(" 03 ")));
/// assert!(!Identifier::from("03").matches(&Identifier::from("3")));
/// assert_ne!(Identifier::Int(3), Identifier::from("3"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identifier {
    /// Integer-typed id.
    Int(i64),
    /// String-typed id.
    Str(String),
}

impl Identifier {
    /// Integer value this id stands for when compared against an integer id.
    ///
    /// `Int(n)` yields `n`. A string yields the `i64` its trimmed text parses
    /// as, or `None`; the empty string and integers outside the `i64` range
    /// therefore never stand for a number.
    #[must_use]
    pub fn numeric_value(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            Self::Str(s) => s.trim().parse().ok(),
        }
    }

    /// Canonical-value equality.
    ///
    /// - `Int(a)` matches `Int(b)` iff `a == b`
    /// - `Str(a)` matches `Str(b)` iff `a == b`, byte for byte
    /// - `Int(n)` matches `Str(s)` (either order) iff `s.trim()` parses as `n`
    ///
    /// The relation is symmetric but not transitive across types: `"03"` and
    /// `"3"` both match `3` without matching each other.
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Int(n), text @ Self::Str(_)) | (text @ Self::Str(_), Self::Int(n)) => {
                text.numeric_value() == Some(*n)
            }
        }
    }

    /// Coerces a raw JSON value into an identifier.
    ///
    /// Integral numbers within the `i64` range keep their integer type.
    /// Everything else is coerced to its textual form: strings as-is, other
    /// scalars via their JSON spelling, arrays and objects as compact JSON.
    #[must_use]
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::Number(n) => n
                .as_i64()
                .map_or_else(|| Self::Str(n.to_string()), Self::Int),
            other => Self::Str(text_of(other)),
        }
    }

    /// Whether the id is integer-typed.
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }
}

/// Textual coercion of a JSON value, as used for labels.
pub(crate) fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Str(s) => f.write_str(s),
        }
    }
}

impl From<i64> for Identifier {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Identifier {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Identifier {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for Identifier {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Identifier {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
