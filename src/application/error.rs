//! Application-level errors
//!
//! The domain build itself is infallible; everything that can fail lives at
//! this boundary (record files, configuration, missing root).

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("record file not found: {0}")]
    RecordFileNotFound(PathBuf),

    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid record file: {0}")]
    InvalidRecords(#[from] serde_json::Error),

    #[error("record file must contain a JSON array of objects: {0}")]
    NotAnArray(PathBuf),

    #[error("no root department found")]
    NoRoot,

    #[error("department not found: {0}")]
    UnknownDepartment(String),

    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("failed to serialize config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
