//! Domain Value Objects
//!
//! Immutable types without identity.
//! - `Rect` - an element's box on the page
//! - `PixelRange` - inclusive pixel bounds
//! - `Constraint` - the geometric rule vocabulary
//! - `Properties` - the named string bag passed to spec loaders

mod config_warning;
mod constraint;
mod pixel_range;
mod properties;
mod rect;

pub use config_warning::ConfigWarning;
pub use constraint::Constraint;
pub use pixel_range::PixelRange;
pub use properties::Properties;
pub use rect::Rect;
