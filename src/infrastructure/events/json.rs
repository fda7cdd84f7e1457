//! JSON Validation Listener
//!
//! Streams validation events as NDJSON for CI/automation consumption.

use std::cell::RefCell;
use std::io::{self, Write};

use crate::domain::entities::LayoutReport;
use crate::domain::ports::{ListenerError, ValidationEvent, ValidationListener};

/// Listener that writes one JSON object per event
pub struct JsonValidationListener {
    writer: RefCell<Box<dyn Write>>,
}

impl JsonValidationListener {
    /// Create a new JSON listener writing to stdout
    pub fn stdout() -> Self {
        Self::with_writer(io::stdout())
    }

    /// Create a JSON listener writing to a custom writer
    pub fn with_writer<W: Write + 'static>(writer: W) -> Self {
        Self {
            writer: RefCell::new(Box::new(writer)),
        }
    }

    /// Emit the closing `complete` line for a finished check
    pub fn complete(&self, report: &LayoutReport) -> Result<(), ListenerError> {
        self.write_event(serde_json::json!({
            "event": "complete",
            "command": "check",
            "status": report.status(),
            "errors": report.error_count(),
            "screenshot": report.screenshot().map(|p| p.display().to_string()),
        }))
    }

    fn write_event(&self, event: serde_json::Value) -> Result<(), ListenerError> {
        let mut writer = self
            .writer
            .try_borrow_mut()
            .map_err(|_| ListenerError::failed("re-entrant write"))?;
        writeln!(writer, "{}", event)?;
        writer.flush()?;
        Ok(())
    }
}

impl ValidationListener for JsonValidationListener {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        let json = match *event {
            ValidationEvent::SectionStarted { spec, section } => {
                serde_json::json!({
                    "event": "section_start",
                    "command": "check",
                    "spec": spec.display().to_string(),
                    "section": section,
                })
            }

            ValidationEvent::RulePassed {
                spec,
                section,
                rule,
            } => {
                serde_json::json!({
                    "event": "rule_passed",
                    "command": "check",
                    "spec": spec.display().to_string(),
                    "section": section,
                    "rule": rule.to_string(),
                })
            }

            ValidationEvent::ErrorFound(error) => {
                serde_json::json!({
                    "event": "error",
                    "command": "check",
                    "spec": error.spec().display().to_string(),
                    "section": error.section(),
                    "object": error.object(),
                    "rule": error.rule(),
                    "message": error.message(),
                    "areas": error.areas(),
                })
            }

            ValidationEvent::SectionFinished {
                spec,
                section,
                errors,
            } => {
                serde_json::json!({
                    "event": "section_complete",
                    "command": "check",
                    "spec": spec.display().to_string(),
                    "section": section,
                    "errors": errors,
                })
            }
        };

        self.write_event(json)
    }
}
