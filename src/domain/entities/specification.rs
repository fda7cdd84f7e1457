//! Specification entity - a loaded layout spec file
//!
//! A specification is an ordered list of named, tagged sections. Each
//! section carries layout rules and may nest child sections. Objects are
//! declared once per specification and referenced by name from rules.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::services::SectionFilter;
use crate::domain::value_objects::Constraint;

/// Built-in object naming the visible screen area; needs no declaration
pub const SCREEN_OBJECT: &str = "screen";

/// One rule: `object` must satisfy `constraint`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRule {
    pub object: String,
    pub constraint: Constraint,
}

impl LayoutRule {
    pub fn new(object: impl Into<String>, constraint: Constraint) -> Self {
        Self {
            object: object.into(),
            constraint,
        }
    }
}

impl std::fmt::Display for LayoutRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.object, self.constraint)
    }
}

/// A named, taggable group of rules
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Section {
    pub name: String,
    pub tags: Vec<String>,
    pub rules: Vec<LayoutRule>,
    pub sections: Vec<Section>,
}

impl Section {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_rule(mut self, rule: LayoutRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// True if any of `tags` is attached to this section
    pub fn has_any_tag(&self, tags: &[String]) -> bool {
        self.tags.iter().any(|tag| tags.contains(tag))
    }

    /// True if neither this section nor its children carry any rule
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.sections.iter().all(Section::is_empty)
    }
}

/// A parsed layout specification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specification {
    path: PathBuf,
    objects: BTreeMap<String, String>,
    sections: Vec<Section>,
}

impl Specification {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            objects: BTreeMap::new(),
            sections: Vec::new(),
        }
    }

    /// Declare an object name and the locator used to find it on the page
    pub fn with_object(mut self, name: impl Into<String>, locator: impl Into<String>) -> Self {
        self.objects.insert(name.into(), locator.into());
        self
    }

    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn objects(&self) -> &BTreeMap<String, String> {
        &self.objects
    }

    /// Locator for a declared object
    pub fn locator(&self, object: &str) -> Option<&str> {
        self.objects.get(object).map(String::as_str)
    }

    /// True if `object` is declared or built in
    pub fn knows_object(&self, object: &str) -> bool {
        object == SCREEN_OBJECT || self.objects.contains_key(object)
    }

    /// Top-level sections admitted by `filter`, in declaration order
    pub fn find_sections(&self, filter: &SectionFilter) -> Vec<&Section> {
        filter.active_sections(&self.sections)
    }
}
