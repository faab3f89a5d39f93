//! Domain layer for selectkit.
//!
//! This module contains the core data types of the selection engine,
//! independent of event handling and rendering concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`identifier`]: Option ids with canonical-value matching
//! - [`option`]: Option records and catalog normalization
//!
//! # Examples
//!
//! ```
//! use selectkit::domain::{normalize, FieldMap, Result};
//! use serde_json::json;
//!
//! fn load() -> Result<()> {
//!     let catalog = normalize(&[json!({"id": 1, "label": "Alpha"})], &FieldMap::default());
//!     assert_eq!(catalog.len(), 1);
//!     Ok(())
//! }
//! # load().unwrap();
//! ```

pub mod error;
pub mod identifier;
pub mod option;

pub use error::{Result, SelectError};
pub use identifier::Identifier;
pub use option::{
    normalize, normalize_strict, normalize_with, parse_options, Catalog, FieldMap, OptionRecord,
    MISSING_FIELD_TEXT,
};
