//! layoutcheck CLI
//!
//! Usage: layoutcheck <COMMAND>
//!
//! Commands:
//!   check     Check a page snapshot against layout specs
//!   sections  List spec sections and whether a check would run them

mod cli;
mod commands;

use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use commands::{CheckArgs, Context, SectionsArgs};
use layoutcheck::config::Config;
use layoutcheck::presentation::{output, OutputStyle};

/// Exit status when the check could not run at all
const EXIT_ERROR: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let project_root = commands::discover_project_root(&cwd);

    let (config, warnings) = match &cli.config {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            (config.with_env_overrides(), warnings)
        }
        None => Config::discover(&project_root)?,
    };

    init_tracing(cli.verbose, &config);

    let style = OutputStyle::detect(cli.color, &config.output);
    for warning in &warnings {
        eprint!("{}", output::render_config_warning(warning, style));
    }

    let ctx = Context {
        json: cli.json,
        verbose: cli.verbose,
        style,
        config,
        project_root,
    };

    match cli.command {
        Commands::Check {
            page,
            specs,
            include,
            exclude,
            properties,
            test_name,
            report,
        } => commands::cmd_check(
            &ctx,
            CheckArgs {
                page,
                specs,
                include,
                exclude,
                properties,
                test_name,
                report,
            },
        ),
        Commands::Sections {
            specs,
            include,
            exclude,
            properties,
        } => commands::cmd_sections(
            &ctx,
            SectionsArgs {
                specs,
                include,
                exclude,
                properties,
            },
        ),
    }
}

/// Logs go to stderr so NDJSON on stdout stays parseable.
/// `LAYOUTCHECK_LOG` takes a full filter; otherwise `-v` or the config decides.
fn init_tracing(verbose: u8, config: &Config) {
    let directive = match verbose {
        0 => config.output.verbosity.log_directive(),
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("LAYOUTCHECK_LOG")
                .unwrap_or_else(|_| EnvFilter::new(directive)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
