//! SpecLoader port
//!
//! Turns a spec file path into a `Specification`. Any error here is fatal to
//! the layout check that requested the load.

use std::path::{Path, PathBuf};

use crate::domain::entities::Specification;
use crate::domain::value_objects::Properties;

use super::Page;

pub trait SpecLoader {
    fn read(
        &self,
        path: &Path,
        properties: &Properties,
        page: &dyn Page,
    ) -> Result<Specification, LoadError>;
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum LoadError {
    #[error("Spec file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read spec file {path}: {message}")]
    Unreadable { path: PathBuf, message: String },

    #[error("Malformed spec file {path}: {message}")]
    Malformed { path: PathBuf, message: String },

    #[error("Unknown variable '${{{name}}}' in {path}\n  → Fix: pass it with --property {name}=<value>")]
    UnknownVariable { path: PathBuf, name: String },

    #[error("Section '{section}' in {path} references undeclared object '{object}'\n  → Fix: declare it under `objects:`")]
    UnknownObject {
        path: PathBuf,
        section: String,
        object: String,
    },
}
