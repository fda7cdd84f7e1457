//! LayoutReport entity - the outcome of one layout check
//!
//! A report is assembled by `LayoutReportBuilder` and only ever handed out
//! finished. The verdict is derived: the check fails iff any validation
//! error was aggregated.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::ser::{Serialize, SerializeStruct, Serializer};

use super::ValidationError;
use crate::domain::services::ErrorAggregator;

/// Pass/fail verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Passed,
    Failed,
}

impl ReportStatus {
    pub fn from_error_count(count: usize) -> Self {
        if count == 0 {
            ReportStatus::Passed
        } else {
            ReportStatus::Failed
        }
    }
}

impl std::fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportStatus::Passed => write!(f, "passed"),
            ReportStatus::Failed => write!(f, "failed"),
        }
    }
}

/// Sealed result of a layout check
#[derive(Debug, Clone)]
pub struct LayoutReport {
    screenshot: Option<PathBuf>,
    errors: Vec<ValidationError>,
    spec_paths: Vec<PathBuf>,
    included_tags: Vec<String>,
    excluded_tags: Vec<String>,
    checked_at: DateTime<Utc>,
}

impl LayoutReport {
    /// Screenshot taken before validation, absent if capture failed
    pub fn screenshot(&self) -> Option<&PathBuf> {
        self.screenshot.as_ref()
    }

    /// Aggregated errors, in spec-file order
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_passed(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn status(&self) -> ReportStatus {
        ReportStatus::from_error_count(self.errors.len())
    }

    pub fn spec_paths(&self) -> &[PathBuf] {
        &self.spec_paths
    }

    pub fn included_tags(&self) -> &[String] {
        &self.included_tags
    }

    pub fn excluded_tags(&self) -> &[String] {
        &self.excluded_tags
    }

    pub fn checked_at(&self) -> DateTime<Utc> {
        self.checked_at
    }
}

/// Writes the derived verdict ahead of the stored fields
impl Serialize for LayoutReport {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("LayoutReport", 8)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("error_count", &self.error_count())?;
        state.serialize_field("screenshot", &self.screenshot)?;
        state.serialize_field("errors", &self.errors)?;
        state.serialize_field("spec_paths", &self.spec_paths)?;
        state.serialize_field("included_tags", &self.included_tags)?;
        state.serialize_field("excluded_tags", &self.excluded_tags)?;
        state.serialize_field("checked_at", &self.checked_at)?;
        state.end()
    }
}

/// Accumulates the pieces of a `LayoutReport`
///
/// Errors go through an `ErrorAggregator`, so adding the same error twice
/// (same `ErrorId`) keeps the first occurrence only.
#[derive(Debug, Default)]
pub struct LayoutReportBuilder {
    screenshot: Option<PathBuf>,
    errors: ErrorAggregator,
    spec_paths: Vec<PathBuf>,
    included_tags: Vec<String>,
    excluded_tags: Vec<String>,
    checked_at: Option<DateTime<Utc>>,
}

impl LayoutReportBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn screenshot(mut self, screenshot: Option<PathBuf>) -> Self {
        self.screenshot = screenshot;
        self
    }

    pub fn spec_paths(mut self, spec_paths: Vec<PathBuf>) -> Self {
        self.spec_paths = spec_paths;
        self
    }

    pub fn tags(mut self, included: Vec<String>, excluded: Vec<String>) -> Self {
        self.included_tags = included;
        self.excluded_tags = excluded;
        self
    }

    /// Pin the report timestamp (defaults to build time)
    pub fn checked_at(mut self, at: DateTime<Utc>) -> Self {
        self.checked_at = Some(at);
        self
    }

    /// Add one error; returns false if an error with the same identity was
    /// already added
    pub fn add_error(&mut self, error: ValidationError) -> bool {
        self.errors.push(error)
    }

    /// Add errors in order; returns how many were new
    pub fn add_errors<I>(&mut self, errors: I) -> usize
    where
        I: IntoIterator<Item = ValidationError>,
    {
        self.errors.extend(errors)
    }

    pub fn build(self) -> LayoutReport {
        LayoutReport {
            screenshot: self.screenshot,
            errors: self.errors.into_errors(),
            spec_paths: self.spec_paths,
            included_tags: self.included_tags,
            excluded_tags: self.excluded_tags,
            checked_at: self.checked_at.unwrap_or_else(Utc::now),
        }
    }
}
