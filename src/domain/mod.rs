//! Domain Layer
//!
//! Pure layout-check logic without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Specification, ValidationError, LayoutReport, TestReport
//! - `value_objects/` - Rect, PixelRange, Constraint, Properties
//! - `services/` - SectionFilter, ErrorAggregator
//! - `ports/` - Browser, SpecLoader, SectionValidator, ValidationListener, TestSession
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or a browser directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
