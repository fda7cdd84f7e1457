//! layoutcheck - layout verification for rendered pages
//!
//! A layout check loads declarative spec files, keeps the sections whose
//! tags match the requested filter, validates their rules against the
//! current page and aggregates every failure into one `LayoutReport`.
//!
//! ## Layers
//!
//! - `domain` - entities, value objects, filter/aggregation services, ports
//! - `application` - the check layout use case and test sessions
//! - `infrastructure` - YAML specs, page snapshots, rule evaluation, NDJSON, reports
//! - `presentation` - use case wiring and terminal rendering

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{CheckLayoutRequest, CheckLayoutUseCase, SessionScope};
pub use config::Config;
pub use domain::entities::{LayoutReport, ValidationError};
pub use error::{LayoutCheckError, LayoutCheckResult};
