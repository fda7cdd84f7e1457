//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Properties;
use crate::error::LayoutCheckResult;

use super::loader::{self, ConfigWarning};

/// Defaults for the `check` command
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CheckConfig {
    /// Tags a section must carry to be checked (empty: all sections)
    #[serde(default)]
    pub include: Vec<String>,

    /// Tags that exclude a section and its children
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Spec files checked when none are given on the command line
    #[serde(default)]
    pub specs: Vec<PathBuf>,
}

/// Report output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ReportConfig {
    /// Directory receiving a timestamped JSON report for every check
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// Output configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub color: ColorMode,
}

/// Color output mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Default tracing filter directive for this verbosity
    pub fn log_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "error",
            Verbosity::Normal => "warn",
            Verbosity::Verbose => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub check: CheckConfig,

    /// Properties available to `${name}` placeholders in spec files
    #[serde(default)]
    pub properties: Properties,

    #[serde(default)]
    pub report: ReportConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> LayoutCheckResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> LayoutCheckResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults; env overrides
    /// are applied on top. A config file that exists but fails to parse is
    /// an error.
    pub fn discover(project_root: &Path) -> LayoutCheckResult<(Self, Vec<ConfigWarning>)> {
        loader::discover(project_root)
    }

    /// Apply environment variable overrides (LAYOUTCHECK_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
