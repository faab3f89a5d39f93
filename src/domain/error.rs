//! Error types for selectkit.
//!
//! This module defines the centralized error type [`SelectError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! The selection engine itself resolves ambiguous input to defined fallbacks
//! (unmatched values clear, missing fields read as `"undefined"`), so these
//! variants only surface for misuse of the event API and for ambient I/O.

use thiserror::Error;

/// The main error type for selectkit operations.
///
/// # Examples
///
/// ```
/// use selectkit::SelectError;
///
/// fn validate_config() -> Result<(), SelectError> {
///     Err(SelectError::Config("unknown mode `both`".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum SelectError {
    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raw option records could not be parsed as JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration is invalid or missing.
    ///
    /// Occurs when required configuration values are missing or malformed.
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// A raw option record lacks the field named by the field map.
    ///
    /// Only produced by strict normalization; the lenient path coerces the
    /// missing value to `"undefined"` instead.
    #[error("option #{index} has no field `{field}`")]
    MissingField {
        /// Position of the record in the raw input.
        index: usize,
        /// Name of the missing field.
        field: String,
    },

    /// A gesture was sent to a control whose mode does not accept it,
    /// e.g. `ToggleAll` on a single-select.
    #[error("gesture `{gesture}` is not supported in {mode} mode")]
    UnsupportedGesture {
        /// Name of the rejected gesture.
        gesture: &'static str,
        /// Mode of the receiving control.
        mode: crate::app::SelectMode,
    },
}

/// A specialized `Result` type for selectkit operations.
pub type Result<T> = std::result::Result<T, SelectError>;
