//! Validation Listener Port
//!
//! Observable interface for the validation lifecycle.
//! Feeds NDJSON event streams and report building.
//!
//! Listeners run synchronously on the validating thread. A listener that
//! cannot handle an event returns `ListenerError`; the caller decides whether
//! that failure matters (the listener hub logs it and moves on).

use std::path::Path;

use crate::domain::entities::{LayoutRule, ValidationError};

/// Event emitted while validating sections
#[derive(Debug, Clone, Copy)]
pub enum ValidationEvent<'a> {
    /// Section validation started
    SectionStarted { spec: &'a Path, section: &'a str },

    /// A rule held
    RulePassed {
        spec: &'a Path,
        section: &'a str,
        rule: &'a LayoutRule,
    },

    /// A rule failed
    ErrorFound(&'a ValidationError),

    /// Section validation finished; `errors` counts this section's own
    /// failed rules
    SectionFinished {
        spec: &'a Path,
        section: &'a str,
        errors: usize,
    },
}

/// Trait for receiving validation events
pub trait ValidationListener {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError>;
}

/// A listener failed to handle an event
#[derive(Debug, thiserror::Error)]
pub enum ListenerError {
    #[error("listener failed: {message}")]
    Failed { message: String },

    #[error("listener I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListenerError {
    pub fn failed(message: impl Into<String>) -> Self {
        ListenerError::Failed {
            message: message.into(),
        }
    }
}

/// Listener that ignores every event
pub struct NoopListener;

impl ValidationListener for NoopListener {
    fn on_event(&self, _event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        Ok(())
    }
}
