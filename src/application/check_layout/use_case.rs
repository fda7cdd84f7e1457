//! Check Layout Use Case
//!
//! Orchestrates one layout check:
//! 1. Capture a screenshot (best-effort)
//! 2. Wire the caller's listener and the report collector into a hub
//! 3. For each spec file, in order: load (fatal on failure), filter
//!    sections, validate, merge pushed and returned errors
//! 4. Seal the report
//! 5. Record a node in the test session, if one was given
//!
//! Spec files are processed strictly in sequence on the caller's thread.
//! Later specs may depend on page state left behind by earlier ones.

use tracing::{debug, info};

use crate::domain::entities::{LayoutReport, LayoutReportBuilder, ReportNode};
use crate::domain::ports::{
    Browser, LoadError, NoopListener, SectionValidator, SpecLoader, TestSession,
    ValidationContext, ValidationListener,
};
use crate::domain::services::SectionFilter;

use super::listener_hub::{ListenerHub, ReportCollector};
use super::options::CheckLayoutRequest;
use super::step::StepResultExt;

/// Check layout use case, parameterized by its loader and validator ports
pub struct CheckLayoutUseCase<L, V>
where
    L: SpecLoader,
    V: SectionValidator,
{
    pub(super) loader: L,
    pub(super) validator: V,
}

impl<L, V> CheckLayoutUseCase<L, V>
where
    L: SpecLoader,
    V: SectionValidator,
{
    pub fn new(loader: L, validator: V) -> Self {
        Self { loader, validator }
    }

    /// Run a check without observers or session reporting
    pub fn execute(
        &self,
        browser: &dyn Browser,
        request: &CheckLayoutRequest,
    ) -> Result<LayoutReport, LoadError> {
        self.check_layout(browser, request, &NoopListener, None)
    }

    /// Run a check, streaming events to `listener` and recording the outcome
    /// in `session` when one is given.
    ///
    /// Fails only when a spec file cannot be loaded; no report is produced
    /// in that case and later spec files are not touched.
    pub fn check_layout(
        &self,
        browser: &dyn Browser,
        request: &CheckLayoutRequest,
        listener: &dyn ValidationListener,
        session: Option<&dyn TestSession>,
    ) -> Result<LayoutReport, LoadError> {
        let screenshot = browser.create_screenshot().degrade("screenshot");

        let collector = ReportCollector::new();
        let mut hub = ListenerHub::new();
        hub.add(listener);
        hub.add(&collector);

        let page = browser.page();
        let filter = SectionFilter::new(
            request.included_tags.clone(),
            request.excluded_tags.clone(),
        );

        let mut builder = LayoutReportBuilder::new()
            .screenshot(screenshot)
            .spec_paths(request.spec_paths.clone())
            .tags(request.included_tags.clone(), request.excluded_tags.clone());

        for (pass, path) in request.spec_paths.iter().enumerate() {
            debug!(spec = %path.display(), "loading spec");
            let spec = self
                .loader
                .read(path, &request.properties, page)
                .abort("load spec")?;

            let sections = spec.find_sections(&filter);
            debug!(
                spec = %path.display(),
                active = sections.len(),
                total = spec.sections().len(),
                "filtered sections"
            );

            let context = ValidationContext {
                spec: &spec,
                pass,
                filter: &filter,
                page,
                listener: &hub,
            };
            let returned = self.validator.check(&context, &sections);

            let pushed = builder.add_errors(collector.drain());
            let direct = builder.add_errors(returned);
            debug!(spec = %path.display(), pushed, direct, "merged validation errors");
        }

        let report = builder.build();
        info!(
            specs = request.spec_paths.len(),
            errors = report.error_count(),
            status = %report.status(),
            listener_failures = hub.failures(),
            "layout check finished"
        );

        if let Some(session) = session {
            let node = ReportNode::for_layout(
                report.clone(),
                &request.spec_paths,
                &request.included_tags,
            );
            debug!(session = session.name(), title = node.title(), "recording report node");
            session.add_node(node);
        }

        Ok(report)
    }
}
