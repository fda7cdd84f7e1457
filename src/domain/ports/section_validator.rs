//! SectionValidator port
//!
//! Executes the rules of active sections against the current page. Failed
//! rules come back two ways: as the return value and as `ErrorFound` events
//! on the context's listener. Implementations may recurse into child
//! sections and report their errors through the listener only.

use crate::domain::entities::{Section, Specification, ValidationError};
use crate::domain::services::SectionFilter;

use super::{Page, ValidationListener};

/// Everything a validator needs besides the sections themselves
pub struct ValidationContext<'a> {
    pub spec: &'a Specification,
    /// Position of `spec` in the request; the same file may appear twice
    pub pass: usize,
    pub filter: &'a SectionFilter,
    pub page: &'a dyn Page,
    pub listener: &'a dyn ValidationListener,
}

pub trait SectionValidator {
    fn check(&self, context: &ValidationContext<'_>, sections: &[&Section]) -> Vec<ValidationError>;
}
