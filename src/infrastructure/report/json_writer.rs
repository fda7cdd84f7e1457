//! JSON Report Writer
//!
//! Writes layout and session reports as pretty-printed JSON. Files are
//! written to a temp file in the target directory and renamed into place,
//! so a reader never sees a half-written report.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tempfile::NamedTempFile;

#[derive(Debug, thiserror::Error)]
pub enum ReportWriteError {
    #[error("Failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct JsonReportWriter;

impl JsonReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Serialize `report` to `path`, creating parent directories
    pub fn write<T: Serialize>(&self, path: &Path, report: &T) -> Result<(), ReportWriteError> {
        let json = serde_json::to_string_pretty(report)?;
        let io_err = |source| ReportWriteError::Io {
            path: path.to_path_buf(),
            source,
        };

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(io_err)?;
        tmp.write_all(json.as_bytes()).map_err(io_err)?;
        tmp.write_all(b"\n").map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;
        Ok(())
    }
}

/// Report file name inside a report directory, stamped with the check time
pub fn report_path_in(dir: &Path, checked_at: DateTime<Utc>) -> PathBuf {
    dir.join(format!(
        "layout-report-{}.json",
        checked_at.format("%Y%m%dT%H%M%SZ")
    ))
}
