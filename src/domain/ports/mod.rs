//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod browser;
pub mod section_validator;
pub mod spec_loader;
pub mod test_session;
pub mod validation_listener;

pub use browser::{Browser, CaptureError, Page, PageElement};
pub use section_validator::{SectionValidator, ValidationContext};
pub use spec_loader::{LoadError, SpecLoader};
pub use test_session::{NoopSession, TestSession};
pub use validation_listener::{ListenerError, NoopListener, ValidationEvent, ValidationListener};
