//! Check Layout Module
//!
//! The layout validation pipeline.
//!
//! ## Structure
//!
//! - `options` - Input types (`CheckLayoutRequest`)
//! - `listener_hub` - Event fan-out (`ListenerHub`, `ReportCollector`)
//! - `step` - Degrade-or-abort policy for collaborator calls
//! - `use_case` - Core orchestration (`CheckLayoutUseCase`)
//!
//! ## Usage
//!
//! ```ignore
//! use layoutcheck::application::check_layout::{CheckLayoutRequest, CheckLayoutUseCase};
//!
//! let use_case = CheckLayoutUseCase::new(loader, validator);
//! let report = use_case.execute(&browser, &CheckLayoutRequest::new(["home.yaml"]))?;
//! ```

mod listener_hub;
mod options;
mod step;
mod use_case;

pub use listener_hub::{ListenerHub, ReportCollector};
pub use options::CheckLayoutRequest;
pub use use_case::CheckLayoutUseCase;
