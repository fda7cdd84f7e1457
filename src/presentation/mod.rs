//! Presentation Layer
//!
//! This layer handles:
//! - Creating use cases with infrastructure dependencies
//! - Output formatting (text; NDJSON lives with the event listeners)
//!
//! ## Structure
//!
//! - `factory` - Creates use cases with proper dependencies (dependency injection)
//! - `output` - Terminal rendering of headers, reports and section listings

pub mod factory;
pub mod output;

pub use factory::create_check_layout_use_case;
pub use output::OutputStyle;

/// `--color` flag values
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}
