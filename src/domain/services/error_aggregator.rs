//! Error Aggregator
//!
//! Collects validation errors from any number of channels into one ordered
//! list. The aggregator is idempotent per `ErrorId`: an error that arrives
//! twice (pushed through a listener and returned by the validator) is kept
//! once, at the position it was first seen. Errors with distinct identities
//! are never dropped.

use std::collections::HashSet;

use crate::domain::entities::{ErrorId, ValidationError};

#[derive(Debug, Default)]
pub struct ErrorAggregator {
    errors: Vec<ValidationError>,
    seen: HashSet<ErrorId>,
}

impl ErrorAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false if an error with the same identity is already present
    pub fn push(&mut self, error: ValidationError) -> bool {
        if !self.seen.insert(error.id().clone()) {
            return false;
        }
        self.errors.push(error);
        true
    }

    /// Push errors in order; returns how many were new
    pub fn extend<I>(&mut self, errors: I) -> usize
    where
        I: IntoIterator<Item = ValidationError>,
    {
        let mut added = 0;
        for error in errors {
            if self.push(error) {
                added += 1;
            }
        }
        added
    }

    pub fn contains(&self, id: &ErrorId) -> bool {
        self.seen.contains(id)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}
