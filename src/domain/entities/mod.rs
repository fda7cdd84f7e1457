//! Domain Entities
//!
//! - `Specification` - A loaded layout spec (sections, rules, objects)
//! - `ValidationError` - One failed rule instance, with explicit identity
//! - `LayoutReport` - The sealed outcome of one layout check
//! - `TestReport` - The report tree a test session accumulates

mod layout_report;
mod specification;
mod test_report;
mod validation_error;

pub use layout_report::{LayoutReport, LayoutReportBuilder, ReportStatus};
pub use specification::{LayoutRule, Section, Specification, SCREEN_OBJECT};
pub use test_report::{ReportNode, TestReport};
pub use validation_error::{ErrorId, ValidationError};
