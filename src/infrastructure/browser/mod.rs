//! Browser implementations

mod static_page;

pub use static_page::{SnapshotError, StaticPage, StaticPageBrowser};
