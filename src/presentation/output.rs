//! Output Rendering
//!
//! Renders check headers, layout reports and section listings as text.
//! Every renderer returns a `String` so commands decide where it goes.

use std::fmt::Write as _;
use std::path::PathBuf;

use crossterm::style::{Color, Stylize};
use is_terminal::IsTerminal;

use crate::config::{ColorMode, ConfigWarning, OutputConfig};
use crate::domain::entities::{LayoutReport, Section, Specification};
use crate::domain::services::SectionFilter;

use super::ColorWhen;

/// Semantic colors
mod colors {
    use super::Color;

    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
    pub const WARNING: Color = Color::Yellow;
    pub const INFO: Color = Color::Cyan;
    pub const DIM: Color = Color::DarkGrey;
}

/// Icons for output rendering
struct Icons {
    check: &'static str,
    pass: &'static str,
    fail: &'static str,
    warn: &'static str,
    active: &'static str,
    skipped: &'static str,
}

impl Icons {
    fn unicode() -> Self {
        Self {
            check: "🔍",
            pass: "✓",
            fail: "✗",
            warn: "⚠",
            active: "●",
            skipped: "○",
        }
    }

    fn ascii() -> Self {
        Self {
            check: "[CHECK]",
            pass: "[OK]",
            fail: "[FAIL]",
            warn: "[WARN]",
            active: "[x]",
            skipped: "[ ]",
        }
    }
}

/// How text output is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputStyle {
    pub color: bool,
    pub unicode: bool,
}

impl OutputStyle {
    /// No colors, ASCII icons
    pub fn plain() -> Self {
        Self {
            color: false,
            unicode: false,
        }
    }

    /// Resolve the style from the `--color` flag, config and terminal
    pub fn detect(cli_color: Option<ColorWhen>, config: &OutputConfig) -> Self {
        Self::resolve(
            cli_color,
            config,
            std::io::stdout().is_terminal(),
            |key| std::env::var(key).ok(),
        )
    }

    pub(crate) fn resolve(
        cli_color: Option<ColorWhen>,
        config: &OutputConfig,
        is_tty: bool,
        get_env: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let term = get_env("TERM").unwrap_or_default();
        let dumb = term.eq_ignore_ascii_case("dumb");
        let terminal_color = is_tty && !dumb && get_env("NO_COLOR").is_none();

        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => terminal_color,
            },
        };

        let locale = ["LC_ALL", "LC_CTYPE", "LANG"]
            .iter()
            .find_map(|key| get_env(key))
            .unwrap_or_default()
            .to_uppercase();
        let unicode = !dumb && (locale.contains("UTF-8") || locale.contains("UTF8"));

        Self { color, unicode }
    }

    fn icons(&self) -> Icons {
        if self.unicode {
            Icons::unicode()
        } else {
            Icons::ascii()
        }
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            text.with(color).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Header printed before a check runs
pub fn render_check_header(
    page_title: &str,
    spec_paths: &[PathBuf],
    included: &[String],
    excluded: &[String],
    style: OutputStyle,
) -> String {
    let icons = style.icons();
    let mut out = String::new();
    let _ = writeln!(out, "{} Layout Check", icons.check);
    let _ = writeln!(out, "  Page: {}", page_title);
    let specs: Vec<_> = spec_paths.iter().map(|p| p.display().to_string()).collect();
    let _ = writeln!(out, "  Specs: {}", specs.join(", "));
    if !included.is_empty() {
        let _ = writeln!(out, "  Include: {}", included.join(", "));
    }
    if !excluded.is_empty() {
        let _ = writeln!(out, "  Exclude: {}", excluded.join(", "));
    }
    out.push('\n');
    out
}

/// Errors of a finished check, one line each; rules shown when verbose
pub fn render_report(report: &LayoutReport, verbose: u8, style: OutputStyle) -> String {
    let icons = style.icons();
    let mut out = String::new();

    let mut current_spec: Option<&std::path::Path> = None;
    for error in report.errors() {
        if current_spec != Some(error.spec()) {
            let _ = writeln!(out, "{}", error.spec().display());
            current_spec = Some(error.spec());
        }
        let _ = writeln!(
            out,
            "  {} {}",
            style.paint(icons.fail, colors::ERROR),
            error
        );
        if verbose > 0 {
            let _ = writeln!(
                out,
                "      {}",
                style.paint(&format!("rule: {}", error.rule()), colors::DIM)
            );
        }
    }

    if !report.errors().is_empty() {
        out.push('\n');
    }
    out
}

/// One-line verdict plus the screenshot location
pub fn render_summary(report: &LayoutReport, style: OutputStyle) -> String {
    let icons = style.icons();
    let specs = report.spec_paths().len();
    let mut out = if report.is_passed() {
        format!(
            "{} Layout check passed ({} {})\n",
            style.paint(icons.pass, colors::SUCCESS),
            specs,
            plural(specs, "spec", "specs")
        )
    } else {
        let errors = report.error_count();
        format!(
            "{} Layout check failed: {} {} in {} {}\n",
            style.paint(icons.fail, colors::ERROR),
            errors,
            plural(errors, "error", "errors"),
            specs,
            plural(specs, "spec", "specs")
        )
    };

    match report.screenshot() {
        Some(path) => {
            let _ = writeln!(out, "  Screenshot: {}", path.display());
        }
        None => {
            let _ = writeln!(
                out,
                "  {}",
                style.paint("Screenshot: unavailable", colors::DIM)
            );
        }
    }
    out
}

/// Section tree of a spec, marking which sections a filter would check
pub fn render_sections(spec: &Specification, filter: &SectionFilter, style: OutputStyle) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", spec.path().display());
    for section in spec.sections() {
        render_section(&mut out, section, filter.is_active(section), filter, 1, style);
    }
    out
}

fn render_section(
    out: &mut String,
    section: &Section,
    active: bool,
    filter: &SectionFilter,
    depth: usize,
    style: OutputStyle,
) {
    let icons = style.icons();
    let marker = if active {
        style.paint(icons.active, colors::SUCCESS)
    } else {
        style.paint(icons.skipped, colors::DIM)
    };
    let mut line = format!("{}{} {}", "  ".repeat(depth), marker, section.name);
    if !section.tags.is_empty() {
        line.push(' ');
        line.push_str(&style.paint(&format!("[{}]", section.tags.join(", ")), colors::INFO));
    }
    let rules = section.rules.len();
    line.push_str(&format!(" ({} {})", rules, plural(rules, "rule", "rules")));
    let _ = writeln!(out, "{}", line);

    for child in &section.sections {
        let child_active = active && filter.admits_child(child);
        render_section(out, child, child_active, filter, depth + 1, style);
    }
}

/// Unknown config key warning with an optional suggestion
pub fn render_config_warning(warning: &ConfigWarning, style: OutputStyle) -> String {
    let icons = style.icons();
    let location = match warning.line {
        Some(line) => format!("{}:{}", warning.file.display(), line),
        None => warning.file.display().to_string(),
    };
    let mut out = format!(
        "{} Unknown config key '{}' in {}",
        style.paint(icons.warn, colors::WARNING),
        warning.key,
        location
    );
    if let Some(suggestion) = &warning.suggestion {
        let _ = write!(out, " (did you mean '{}'?)", suggestion);
    }
    out.push('\n');
    out
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
