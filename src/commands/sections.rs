//! Sections command: filter dry-run over spec files

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;

use layoutcheck::domain::entities::Section;
use layoutcheck::domain::ports::SpecLoader;
use layoutcheck::domain::services::SectionFilter;
use layoutcheck::domain::value_objects::Rect;
use layoutcheck::error::LayoutCheckError;
use layoutcheck::infrastructure::{StaticPage, YamlSpecLoader};
use layoutcheck::presentation::output;

use super::Context;

pub struct SectionsArgs {
    pub specs: Vec<PathBuf>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub properties: Vec<String>,
}

pub fn cmd_sections(ctx: &Context, args: SectionsArgs) -> Result<ExitCode> {
    let check = &ctx.config.check;
    let filter = SectionFilter::new(
        Context::tags(args.include, &check.include),
        Context::tags(args.exclude, &check.exclude),
    );
    let properties = ctx.properties(&args.properties)?;

    let loader = YamlSpecLoader::new();
    let blank = StaticPage::new("", Rect::default());

    for path in &args.specs {
        let spec = loader
            .read(path, &properties, &blank)
            .map_err(LayoutCheckError::from)?;

        if ctx.json {
            let sections: Vec<_> = spec
                .sections()
                .iter()
                .flat_map(|section| {
                    section_rows(section, filter.is_active(section), &filter, &section.name)
                })
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "event": "sections",
                    "command": "sections",
                    "spec": spec.path().display().to_string(),
                    "sections": sections,
                })
            );
        } else {
            print!("{}", output::render_sections(&spec, &filter, ctx.style));
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn section_rows(
    section: &Section,
    active: bool,
    filter: &SectionFilter,
    path: &str,
) -> Vec<serde_json::Value> {
    let mut rows = vec![serde_json::json!({
        "section": path,
        "tags": section.tags,
        "rules": section.rules.len(),
        "active": active,
    })];
    for child in &section.sections {
        let child_path = format!("{} > {}", path, child.name);
        rows.extend(section_rows(
            child,
            active && filter.admits_child(child),
            filter,
            &child_path,
        ));
    }
    rows
}
