// crates/country-picker-core/src/error.rs

use thiserror::Error;

/// Convenient result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PickerError>;

/// Errors surfaced by dataset loading and parsing.
///
/// Runtime lookups (device locale, IP geolocation, code-to-country
/// mapping) are best-effort by contract and never produce an error;
/// they degrade to defaults and log a warning instead.
#[derive(Debug, Error)]
pub enum PickerError {
    /// The dataset file could not be opened.
    #[error("Dataset not found: {0}")]
    DatasetNotFound(String),

    /// The dataset payload is not valid JSON for the expected shape.
    #[error("Failed to parse dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Underlying I/O failure while reading a dataset.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
