//! Report output

mod json_writer;

pub use json_writer::{report_path_in, JsonReportWriter, ReportWriteError};
