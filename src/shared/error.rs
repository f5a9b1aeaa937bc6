use thiserror::Error;
use serde::Serialize;

/// Failures surfaced by the catalog and the conversion engine.
///
/// Serialized adjacently tagged so the presentation layer can branch on `type`
/// and show `message` to the user.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum ConversionError {
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Unknown unit: {0}")]
    UnknownUnit(String),

    #[error("Invalid numeric input: {0}")]
    InvalidNumericInput(String),

    #[error("Cannot convert from {from} to {to} (incompatible categories)")]
    CategoryMismatch { from: String, to: String },
}

#[derive(Error, Debug, Serialize)]
pub enum AppError {
    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Conversion Error: {0}")]
    Conversion(#[from] ConversionError),

    #[error("Settings Error: {0}")]
    Settings(String),

    #[error("Validation Error: {0}")]
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Settings(format!("Serialization error: {}", err))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// Result alias for engine-level operations
pub type ConversionResult<T> = Result<T, ConversionError>;
