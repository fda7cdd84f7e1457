//! Test Session Scope
//!
//! Session-scoped reporting for callers that have no test-runner harness.
//! A `SessionScope` owns at most one active session. Registering a test
//! discards the previous session and starts a fresh one, keyed by a
//! human-readable name. The scope is an explicit value: callers pass
//! `scope.current()` into the check layout use case.

use std::cell::RefCell;

use crate::domain::entities::{ReportNode, TestReport};
use crate::domain::ports::TestSession;

/// In-memory session accumulating report nodes
#[derive(Debug)]
pub struct RecordingSession {
    name: String,
    report: RefCell<TestReport>,
}

impl RecordingSession {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            report: RefCell::new(TestReport::new()),
        }
    }

    /// Snapshot of the nodes recorded so far
    pub fn report(&self) -> TestReport {
        self.report.borrow().clone()
    }
}

impl TestSession for RecordingSession {
    fn name(&self) -> &str {
        &self.name
    }

    fn add_node(&self, node: ReportNode) {
        self.report.borrow_mut().add_node(node);
    }
}

#[derive(Debug, Default)]
pub struct SessionScope {
    current: Option<RecordingSession>,
}

impl SessionScope {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset the scope and register a new session for `test_name`
    pub fn register_test(&mut self, test_name: impl Into<String>) -> &RecordingSession {
        self.current.insert(RecordingSession::new(test_name))
    }

    pub fn current(&self) -> Option<&dyn TestSession> {
        self.current.as_ref().map(|s| s as &dyn TestSession)
    }

    pub fn session(&self) -> Option<&RecordingSession> {
        self.current.as_ref()
    }

    /// Report of the active session, if any
    pub fn report(&self) -> Option<TestReport> {
        self.current.as_ref().map(RecordingSession::report)
    }

    /// Drop the active session
    pub fn clear(&mut self) -> Option<RecordingSession> {
        self.current.take()
    }
}
