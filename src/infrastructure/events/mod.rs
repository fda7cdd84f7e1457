//! Validation listener implementations
//!
//! - JsonValidationListener: NDJSON output for CI/automation

mod json;

pub use json::JsonValidationListener;
