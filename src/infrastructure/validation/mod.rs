//! Section validator implementations
//!
//! - PageSectionValidator: evaluates rules against element boxes
//! - rules: constraint geometry

mod page_validator;
pub mod rules;

pub use page_validator::PageSectionValidator;
