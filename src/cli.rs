use std::path::PathBuf;

use clap::{Parser, Subcommand};
use layoutcheck::presentation::ColorWhen;

/// layoutcheck - check rendered pages against layout specs
#[derive(Parser, Debug)]
#[command(name = "layoutcheck")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Exit status: 0 layout passed, 1 layout errors found, 2 could not run the check.")]
pub struct Cli {
    /// Output format for CI (NDJSON events on stdout)
    #[arg(long, global = true)]
    pub json: bool,

    /// Color output mode
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (default: ./layoutcheck.toml, then the user config)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Check a page snapshot against one or more layout specs
    Check {
        /// Page snapshot (JSON) to check
        #[arg(long, value_name = "PATH")]
        page: PathBuf,

        /// Spec files, checked in order (default: [check] specs from config).
        /// Exits 2 when neither names a spec
        #[arg(short, long = "spec", value_name = "PATH")]
        specs: Vec<PathBuf>,

        /// Only check sections carrying one of these tags
        #[arg(short, long, value_delimiter = ',', value_name = "TAG")]
        include: Vec<String>,

        /// Skip sections carrying one of these tags
        #[arg(short, long, value_delimiter = ',', value_name = "TAG")]
        exclude: Vec<String>,

        /// Spec property for ${name} placeholders (can be specified multiple times)
        #[arg(short, long = "property", value_name = "NAME=VALUE")]
        properties: Vec<String>,

        /// Record the check in a named test session
        #[arg(long, value_name = "NAME")]
        test_name: Option<String>,

        /// Write the JSON report to this file
        #[arg(long, value_name = "PATH")]
        report: Option<PathBuf>,
    },

    /// List the sections of a spec and whether a check would run them
    Sections {
        /// Spec files to list
        #[arg(short, long = "spec", value_name = "PATH", required = true)]
        specs: Vec<PathBuf>,

        /// Only check sections carrying one of these tags
        #[arg(short, long, value_delimiter = ',', value_name = "TAG")]
        include: Vec<String>,

        /// Skip sections carrying one of these tags
        #[arg(short, long, value_delimiter = ',', value_name = "TAG")]
        exclude: Vec<String>,

        /// Spec property for ${name} placeholders (can be specified multiple times)
        #[arg(short, long = "property", value_name = "NAME=VALUE")]
        properties: Vec<String>,
    },
}
