//! Error types.
//!
//! Each concern gets its own error enum; [`Error`] wraps them so callers can
//! use a single `Result` alias and still match on the specific failure.

use std::path::PathBuf;

use thiserror::Error as ThisError;

use crate::core::frame::DType;

/// Top-level error for stowage operations.
#[derive(ThisError, Debug)]
pub enum Error {
    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error(transparent)]
    DuplicateKey(#[from] DuplicateKeyError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// A table's columns do not match the expected schema.
///
/// Raised once, at construction. Never retried or recovered internally.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum SchemaError {
    #[error("column '{column}' has dtype {actual}, expected {expected}")]
    TypeMismatch {
        column: String,
        expected: DType,
        actual: DType,
    },

    #[error("missing column: {0}")]
    MissingColumn(String),

    #[error("unexpected column: {0}")]
    UnexpectedColumn(String),

    #[error("column '{column}' has {actual} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}

/// Two rows collapsed to the same derived identifier during projection.
#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
#[error("duplicate identifier '{identifier}' at rows {first_row} and {second_row}")]
pub struct DuplicateKeyError {
    pub identifier: String,
    pub first_row: usize,
    pub second_row: usize,
}

/// Reading settings or frame documents from disk failed.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("toml parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("toml serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported document format: {0} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    #[error("invalid column '{column}': {reason}")]
    InvalidColumn { column: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
