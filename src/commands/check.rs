//! Check command

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use tracing::{debug, info};

use layoutcheck::application::{CheckLayoutRequest, SessionScope};
use layoutcheck::domain::ports::{Browser, NoopListener, ValidationListener};
use layoutcheck::error::LayoutCheckError;
use layoutcheck::infrastructure::report::report_path_in;
use layoutcheck::infrastructure::{JsonReportWriter, JsonValidationListener, StaticPageBrowser};
use layoutcheck::presentation::{create_check_layout_use_case, output};

use super::project_root::resolve;
use super::Context;

pub struct CheckArgs {
    pub page: PathBuf,
    pub specs: Vec<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub properties: Vec<String>,
    pub test_name: Option<String>,
    pub report: Option<PathBuf>,
}

pub fn cmd_check(ctx: &Context, args: CheckArgs) -> Result<ExitCode> {
    let request = build_request(ctx, &args)?;
    let browser = StaticPageBrowser::open(&args.page).map_err(LayoutCheckError::from)?;

    if !ctx.json {
        print!(
            "{}",
            output::render_check_header(
                &browser.page().title(),
                &request.spec_paths,
                &request.included_tags,
                &request.excluded_tags,
                ctx.style,
            )
        );
    }

    let mut scope = SessionScope::new();
    if let Some(name) = &args.test_name {
        scope.register_test(name.as_str());
    }

    let json_listener = ctx.json.then(JsonValidationListener::stdout);
    let listener: &dyn ValidationListener = match &json_listener {
        Some(listener) => listener,
        None => &NoopListener,
    };

    let use_case = create_check_layout_use_case();
    let report = use_case
        .check_layout(&browser, &request, listener, scope.current())
        .map_err(LayoutCheckError::from)?;

    let report_path = args.report.clone().or_else(|| {
        ctx.config
            .report
            .dir
            .as_ref()
            .map(|dir| report_path_in(&resolve(&ctx.project_root, dir), report.checked_at()))
    });
    if let Some(path) = report_path {
        let writer = JsonReportWriter::new();
        let written = match scope.report() {
            Some(session_report) => writer.write(&path, &session_report),
            None => writer.write(&path, &report),
        };
        written.map_err(LayoutCheckError::from)?;
        info!(report = %path.display(), "report written");
    }

    match &json_listener {
        Some(listener) => listener.complete(&report)?,
        None => {
            print!("{}", output::render_report(&report, ctx.verbose, ctx.style));
            print!("{}", output::render_summary(&report, ctx.style));
        }
    }

    Ok(if report.is_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(1)
    })
}

fn build_request(ctx: &Context, args: &CheckArgs) -> Result<CheckLayoutRequest, LayoutCheckError> {
    let check = &ctx.config.check;

    let specs: Vec<PathBuf> = if args.specs.is_empty() {
        check
            .specs
            .iter()
            .map(|spec| resolve(&ctx.project_root, spec))
            .collect()
    } else {
        args.specs.clone()
    };
    if specs.is_empty() {
        return Err(LayoutCheckError::NoSpecs);
    }

    let request = CheckLayoutRequest::new(specs)
        .with_included_tags(Context::tags(args.include.clone(), &check.include))
        .with_excluded_tags(Context::tags(args.exclude.clone(), &check.exclude))
        .with_properties(ctx.properties(&args.properties)?);
    debug!(
        specs = request.spec_paths.len(),
        include = ?request.included_tags,
        exclude = ?request.excluded_tags,
        "built check request"
    );
    Ok(request)
}
