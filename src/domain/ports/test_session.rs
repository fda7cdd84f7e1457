//! TestSession port
//!
//! An optional reporting context that outlives a single layout check. The
//! pipeline appends report nodes to it but never owns its lifecycle.

use crate::domain::entities::ReportNode;

pub trait TestSession {
    /// Human-readable test name
    fn name(&self) -> &str;

    fn add_node(&self, node: ReportNode);
}

/// Session that discards every node
pub struct NoopSession;

impl TestSession for NoopSession {
    fn name(&self) -> &str {
        ""
    }

    fn add_node(&self, _node: ReportNode) {}
}
