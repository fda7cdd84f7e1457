//! Section Filter
//!
//! Decides which sections of a specification run for a given check.
//!
//! A top-level section is active iff
//! - `included` is empty, or the section has at least one included tag, and
//! - the section has no excluded tag.
//!
//! Exclusion wins when a section matches both lists. Nested sections are
//! subject to exclusion only; inclusion is decided by their top-level
//! ancestor.

use crate::domain::entities::Section;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectionFilter {
    included: Vec<String>,
    excluded: Vec<String>,
}

impl SectionFilter {
    pub fn new(included: Vec<String>, excluded: Vec<String>) -> Self {
        Self { included, excluded }
    }

    pub fn included(&self) -> &[String] {
        &self.included
    }

    pub fn excluded(&self) -> &[String] {
        &self.excluded
    }

    pub fn is_active(&self, section: &Section) -> bool {
        let included = self.included.is_empty() || section.has_any_tag(&self.included);
        included && !section.has_any_tag(&self.excluded)
    }

    /// Whether a nested section runs under an already active parent
    pub fn admits_child(&self, section: &Section) -> bool {
        !section.has_any_tag(&self.excluded)
    }

    /// Active sections in their original order
    pub fn active_sections<'a>(&self, sections: &'a [Section]) -> Vec<&'a Section> {
        sections.iter().filter(|s| self.is_active(s)).collect()
    }
}
