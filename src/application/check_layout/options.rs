//! Check Layout Options
//!
//! Input types for the check layout use case.

use std::path::PathBuf;

use crate::domain::value_objects::Properties;

/// What to check: spec files, tag filters and loader properties
#[derive(Debug, Clone, Default)]
pub struct CheckLayoutRequest {
    /// Spec files, validated in this order
    pub spec_paths: Vec<PathBuf>,
    /// Only sections carrying one of these tags run (empty = no restriction)
    pub included_tags: Vec<String>,
    /// Sections carrying any of these tags never run
    pub excluded_tags: Vec<String>,
    /// Passed to the spec loader unchanged
    pub properties: Properties,
}

impl CheckLayoutRequest {
    pub fn new<I, P>(spec_paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            spec_paths: spec_paths.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn with_included_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.included_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_excluded_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded_tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_properties(mut self, properties: Properties) -> Self {
        self.properties = properties;
        self
    }
}
