//! Configuration module for layoutcheck
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (LAYOUTCHECK_*)
//! 3. One config file: ./layoutcheck.toml at the project root, else
//!    ~/.config/layoutcheck/config.toml
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{PROJECT_CONFIG_FILE, USER_CONFIG_FILE};
pub use types::{CheckConfig, ColorMode, Config, OutputConfig, ReportConfig, Verbosity};
