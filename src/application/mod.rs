//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (entities, services, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `CheckLayoutUseCase` - Load specs, filter sections, validate, report
//! - `SessionScope` - Session-scoped report collection (`register_test`)

pub mod check_layout;
pub mod session;

pub use check_layout::{CheckLayoutRequest, CheckLayoutUseCase, ListenerHub, ReportCollector};
pub use session::{RecordingSession, SessionScope};
