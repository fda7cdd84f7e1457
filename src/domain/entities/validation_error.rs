//! ValidationError entity - one failed rule instance
//!
//! A validation error is a result value, not a failure of the pipeline.
//! It carries an explicit identity (`ErrorId`): the spec it came from and
//! that spec's position in the request, the section's position in the spec,
//! the rule's position inside that section, and the object under test.
//! Equality and hashing use the identity only, so the same failure seen
//! through two channels compares equal, while two objects failing the same
//! rule stay distinct.

use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::domain::value_objects::Rect;

/// Identity of a validation error
///
/// Section names are not unique within a spec and a spec may be listed more
/// than once in a request, so identity rests on positions. `section` is
/// carried for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct ErrorId {
    /// Spec file the failing rule was declared in
    pub spec: PathBuf,
    /// Position of the spec file in the request
    pub pass: usize,
    /// Sibling index chain of the section, outermost first, e.g. `0/1`
    pub position: String,
    /// Section path, outermost first, joined with " > "
    pub section: String,
    /// Position of the rule inside its section
    pub rule_index: usize,
    /// Object the rule was evaluated for
    pub object: String,
}

impl ErrorId {
    pub fn new(
        spec: impl Into<PathBuf>,
        section: impl Into<String>,
        rule_index: usize,
        object: impl Into<String>,
    ) -> Self {
        Self {
            spec: spec.into(),
            pass: 0,
            position: String::new(),
            section: section.into(),
            rule_index,
            object: object.into(),
        }
    }

    pub fn with_pass(mut self, pass: usize) -> Self {
        self.pass = pass;
        self
    }

    pub fn with_position(mut self, position: impl Into<String>) -> Self {
        self.position = position.into();
        self
    }
}

impl std::fmt::Display for ErrorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}@{}#{}[{}]/{}",
            self.spec.display(),
            self.pass,
            self.position,
            self.rule_index,
            self.object
        )
    }
}

/// A discovered layout nonconformance
#[derive(Debug, Clone, Serialize)]
pub struct ValidationError {
    id: ErrorId,
    rule: String,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    areas: Vec<Rect>,
}

impl ValidationError {
    pub fn new(id: ErrorId, rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            id,
            rule: rule.into(),
            message: message.into(),
            areas: Vec::new(),
        }
    }

    /// Attach the page areas involved in the failure
    pub fn with_areas(mut self, areas: Vec<Rect>) -> Self {
        self.areas = areas;
        self
    }

    pub fn id(&self) -> &ErrorId {
        &self.id
    }

    pub fn spec(&self) -> &Path {
        &self.id.spec
    }

    pub fn section(&self) -> &str {
        &self.id.section
    }

    pub fn object(&self) -> &str {
        &self.id.object
    }

    /// Rule text as written in the spec, e.g. `header width 100 to 200px`
    pub fn rule(&self) -> &str {
        &self.rule
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn areas(&self) -> &[Rect] {
        &self.areas
    }
}

impl PartialEq for ValidationError {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for ValidationError {}

impl Hash for ValidationError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.id.section, self.message)
    }
}
