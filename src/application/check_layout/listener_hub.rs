//! Listener Hub
//!
//! Fans validation events out to every registered listener, in registration
//! order. A listener that fails is logged and counted; the remaining
//! listeners still receive the event and the hub itself never fails.

use std::cell::{Cell, RefCell};

use tracing::warn;

use crate::domain::entities::ValidationError;
use crate::domain::ports::{ListenerError, ValidationEvent, ValidationListener};

/// Composite listener for the duration of one layout check
#[derive(Default)]
pub struct ListenerHub<'a> {
    listeners: Vec<&'a dyn ValidationListener>,
    failures: Cell<usize>,
}

impl<'a> ListenerHub<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. The same listener may be added more than once
    /// and then receives each event once per registration.
    pub fn add(&mut self, listener: &'a dyn ValidationListener) {
        self.listeners.push(listener);
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Listener failures swallowed so far
    pub fn failures(&self) -> usize {
        self.failures.get()
    }
}

impl ValidationListener for ListenerHub<'_> {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        for (index, listener) in self.listeners.iter().enumerate() {
            if let Err(err) = listener.on_event(event) {
                self.failures.set(self.failures.get() + 1);
                warn!(listener = index, error = %err, "validation listener failed");
            }
        }
        Ok(())
    }
}

/// Internal listener accumulating pushed errors for the report being built
#[derive(Debug, Default)]
pub struct ReportCollector {
    errors: RefCell<Vec<ValidationError>>,
}

impl ReportCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the errors collected since the last drain
    pub fn drain(&self) -> Vec<ValidationError> {
        self.errors.take()
    }
}

impl ValidationListener for ReportCollector {
    fn on_event(&self, event: &ValidationEvent<'_>) -> Result<(), ListenerError> {
        if let ValidationEvent::ErrorFound(error) = event {
            self.errors.borrow_mut().push((*error).clone());
        }
        Ok(())
    }
}
