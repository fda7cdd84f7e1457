//! TestReport entity - the report tree a test session accumulates

use std::path::PathBuf;

use serde::Serialize;

use super::{LayoutReport, ReportStatus};

/// One entry in a session report
#[derive(Debug, Clone, Serialize)]
pub struct ReportNode {
    title: String,
    status: ReportStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    layout: Option<LayoutReport>,
}

impl ReportNode {
    pub fn new(title: impl Into<String>, status: ReportStatus) -> Self {
        Self {
            title: title.into(),
            status,
            layout: None,
        }
    }

    /// Node summarizing a layout check.
    ///
    /// Title format: `Check layout: <specs> included tags: <tags>`, both lists
    /// comma-joined in input order. The node fails iff the report has errors.
    pub fn for_layout(report: LayoutReport, spec_paths: &[PathBuf], included_tags: &[String]) -> Self {
        let specs: Vec<String> = spec_paths
            .iter()
            .map(|p| p.display().to_string())
            .collect();
        let title = format!(
            "Check layout: {} included tags: {}",
            to_comma_separated(&specs),
            to_comma_separated(included_tags)
        );
        Self {
            title,
            status: report.status(),
            layout: Some(report),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn status(&self) -> ReportStatus {
        self.status
    }

    pub fn layout(&self) -> Option<&LayoutReport> {
        self.layout.as_ref()
    }
}

fn to_comma_separated(items: &[String]) -> String {
    items.join(",")
}

/// Ordered list of report nodes
#[derive(Debug, Clone, Default, Serialize)]
pub struct TestReport {
    nodes: Vec<ReportNode>,
}

impl TestReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: ReportNode) {
        self.nodes.push(node);
    }

    pub fn nodes(&self) -> &[ReportNode] {
        &self.nodes
    }

    /// Failed iff any node failed
    pub fn status(&self) -> ReportStatus {
        if self
            .nodes
            .iter()
            .any(|n| n.status == ReportStatus::Failed)
        {
            ReportStatus::Failed
        } else {
            ReportStatus::Passed
        }
    }
}
