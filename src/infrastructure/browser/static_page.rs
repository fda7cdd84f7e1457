//! Static Page Browser
//!
//! A browser over a pre-rendered page snapshot. Live driver sessions are
//! out of scope for this crate; any tool that can dump element boxes to JSON
//! can feed the checker:
//!
//! ```json
//! {
//!   "title": "Home",
//!   "screen": { "left": 0, "top": 0, "width": 1280, "height": 800 },
//!   "screenshot": "home.png",
//!   "elements": {
//!     "#header": { "area": { "left": 0, "top": 0, "width": 1280, "height": 80 } },
//!     "#promo": { "area": { "left": 0, "top": 80, "width": 1280, "height": 0 }, "visible": false }
//!   }
//! }
//! ```
//!
//! A relative `screenshot` path is resolved against the snapshot's directory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::ports::{Browser, CaptureError, Page, PageElement};
use crate::domain::value_objects::Rect;

/// Errors opening a page snapshot
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("Page snapshot not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read page snapshot {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid page snapshot {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonSnapshot {
    #[serde(default)]
    title: String,
    screen: Rect,
    #[serde(default)]
    screenshot: Option<PathBuf>,
    #[serde(default)]
    elements: BTreeMap<String, JsonElement>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct JsonElement {
    area: Rect,
    #[serde(default = "default_visible")]
    visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Page rendered from a snapshot
#[derive(Debug, Clone)]
pub struct StaticPage {
    title: String,
    screen: Rect,
    elements: BTreeMap<String, PageElement>,
}

impl StaticPage {
    pub fn new(title: impl Into<String>, screen: Rect) -> Self {
        Self {
            title: title.into(),
            screen,
            elements: BTreeMap::new(),
        }
    }

    pub fn with_element(mut self, locator: impl Into<String>, element: PageElement) -> Self {
        self.elements.insert(locator.into(), element);
        self
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl Page for StaticPage {
    fn title(&self) -> String {
        self.title.clone()
    }

    fn screen_area(&self) -> Rect {
        self.screen
    }

    fn find_element(&self, locator: &str) -> Option<PageElement> {
        self.elements.get(locator).copied()
    }
}

/// Browser backed by a `StaticPage`
#[derive(Debug, Clone)]
pub struct StaticPageBrowser {
    page: StaticPage,
    screenshot: Option<PathBuf>,
}

impl StaticPageBrowser {
    pub fn new(page: StaticPage) -> Self {
        Self {
            page,
            screenshot: None,
        }
    }

    pub fn with_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot = Some(path.into());
        self
    }

    /// Load a JSON page snapshot from disk
    pub fn open(path: &Path) -> Result<Self, SnapshotError> {
        if !path.exists() {
            return Err(SnapshotError::NotFound(path.to_path_buf()));
        }
        let content = std::fs::read_to_string(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Self::from_json(&content, base).map_err(|source| SnapshotError::Invalid {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse snapshot JSON; relative screenshot paths are joined onto `base`
    pub fn from_json(content: &str, base: &Path) -> Result<Self, serde_json::Error> {
        let snapshot: JsonSnapshot = serde_json::from_str(content)?;

        let mut page = StaticPage::new(snapshot.title, snapshot.screen);
        for (locator, element) in snapshot.elements {
            page = page.with_element(
                locator,
                PageElement {
                    area: element.area,
                    visible: element.visible,
                },
            );
        }

        let mut browser = Self::new(page);
        if let Some(shot) = snapshot.screenshot {
            browser = browser.with_screenshot(if shot.is_absolute() {
                shot
            } else {
                base.join(shot)
            });
        }
        Ok(browser)
    }
}

impl Browser for StaticPageBrowser {
    fn create_screenshot(&self) -> Result<PathBuf, CaptureError> {
        let Some(path) = &self.screenshot else {
            return Err(CaptureError::Unsupported);
        };
        if !path.exists() {
            return Err(CaptureError::Failed {
                message: format!("{} does not exist", path.display()),
            });
        }
        Ok(path.clone())
    }

    fn page(&self) -> &dyn Page {
        &self.page
    }
}
