//! Domain Services
//!
//! Pure logic over domain entities, no I/O.

mod error_aggregator;
mod section_filter;

pub use error_aggregator::ErrorAggregator;
pub use section_filter::SectionFilter;
