//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `spec/` - Spec loaders (YAML)
//! - `browser/` - Browsers (static page snapshots)
//! - `validation/` - Section validator and rule geometry
//! - `events/` - Validation listeners (NDJSON)
//! - `report/` - Report writers (JSON)

pub mod browser;
pub mod events;
pub mod report;
pub mod spec;
pub mod validation;

// Re-export for convenience
pub use browser::{StaticPage, StaticPageBrowser};
pub use events::JsonValidationListener;
pub use report::JsonReportWriter;
pub use spec::YamlSpecLoader;
pub use validation::PageSectionValidator;
