//! Command handlers

mod check;
mod project_root;
mod sections;

use std::path::PathBuf;

use layoutcheck::config::Config;
use layoutcheck::domain::value_objects::Properties;
use layoutcheck::error::LayoutCheckError;
use layoutcheck::presentation::OutputStyle;

pub use check::{cmd_check, CheckArgs};
pub(crate) use project_root::discover_project_root;
pub use sections::{cmd_sections, SectionsArgs};

/// Everything a command needs besides its own arguments
pub struct Context {
    pub json: bool,
    pub verbose: u8,
    pub style: OutputStyle,
    pub config: Config,
    pub project_root: PathBuf,
}

impl Context {
    /// Config properties overlaid with `name=value` pairs from the command line
    fn properties(&self, pairs: &[String]) -> Result<Properties, LayoutCheckError> {
        let mut cli = Properties::new();
        for pair in pairs {
            let (name, value) = Properties::parse_pair(pair)
                .ok_or_else(|| LayoutCheckError::InvalidProperty(pair.clone()))?;
            cli.set(name, value);
        }
        Ok(self.config.properties.clone().merged_with(&cli))
    }

    /// Command-line tags win; otherwise the configured ones apply
    fn tags(cli: Vec<String>, configured: &[String]) -> Vec<String> {
        if cli.is_empty() {
            configured.to_vec()
        } else {
            cli
        }
    }
}
