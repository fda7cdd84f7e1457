//! Error types for layoutcheck
//!
//! Uses `thiserror` for library errors. Port errors keep their own enums;
//! this type wraps them for callers that drive the whole pipeline.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ports::LoadError;
use crate::infrastructure::browser::SnapshotError;
use crate::infrastructure::report::ReportWriteError;

/// Result type alias for layoutcheck operations
pub type LayoutCheckResult<T> = Result<T, LayoutCheckError>;

/// Main error type for layoutcheck operations
#[derive(Error, Debug)]
pub enum LayoutCheckError {
    /// A spec file could not be loaded; the check produced no report
    #[error(transparent)]
    Load(#[from] LoadError),

    /// The page snapshot could not be opened
    #[error(transparent)]
    Snapshot(#[from] SnapshotError),

    /// The report could not be written
    #[error(transparent)]
    Report(#[from] ReportWriteError),

    /// Invalid configuration file
    #[error("invalid config {path}: {message}")]
    InvalidConfig { path: PathBuf, message: String },

    /// Invalid `name=value` property
    #[error("invalid property '{0}' - expected name=value")]
    InvalidProperty(String),

    /// No spec files given on the command line or in config
    #[error("no spec files given - pass --spec or set [check] specs in layoutcheck.toml")]
    NoSpecs,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
