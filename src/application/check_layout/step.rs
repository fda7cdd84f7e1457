//! Failure policy for external call sites
//!
//! Each call into a collaborator is marked as either best-effort or
//! essential:
//! - `degrade` logs the failure and continues with `None`
//! - `abort` logs the failure and propagates it, ending the check

use std::fmt::Display;

use tracing::{debug, warn};

pub(crate) trait StepResultExt<T, E> {
    /// Best-effort step: a failure degrades the result but never aborts
    fn degrade(self, step: &'static str) -> Option<T>;

    /// Essential step: a failure aborts the whole check
    fn abort(self, step: &'static str) -> Result<T, E>;
}

impl<T, E: Display> StepResultExt<T, E> for Result<T, E> {
    fn degrade(self, step: &'static str) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(step, error = %err, "step failed, continuing without it");
                None
            }
        }
    }

    fn abort(self, step: &'static str) -> Result<T, E> {
        if let Err(err) = &self {
            debug!(step, error = %err, "step failed, aborting layout check");
        }
        self
    }
}
