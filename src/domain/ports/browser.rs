//! Browser port - the browser-automation boundary
//!
//! The pipeline only needs two things from a browser: a screenshot of the
//! current page and a handle for querying element boxes. Driver protocols,
//! timeouts and retries belong to the implementation.

use std::path::PathBuf;

use crate::domain::value_objects::Rect;

/// An element found on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageElement {
    pub area: Rect,
    pub visible: bool,
}

impl PageElement {
    pub fn visible(area: Rect) -> Self {
        Self {
            area,
            visible: true,
        }
    }

    pub fn hidden(area: Rect) -> Self {
        Self {
            area,
            visible: false,
        }
    }
}

/// Read-only view of the rendered page
pub trait Page {
    /// Page title, for reporting
    fn title(&self) -> String;

    /// The visible screen area (viewport)
    fn screen_area(&self) -> Rect;

    /// Look up an element by locator; `None` if nothing matches
    fn find_element(&self, locator: &str) -> Option<PageElement>;
}

pub trait Browser {
    /// Capture the current page and return the image path
    fn create_screenshot(&self) -> Result<PathBuf, CaptureError>;

    fn page(&self) -> &dyn Page;
}

/// Screenshot capture failed
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("screenshots are not supported by this browser")]
    Unsupported,

    #[error("screenshot capture failed: {message}")]
    Failed { message: String },
}
