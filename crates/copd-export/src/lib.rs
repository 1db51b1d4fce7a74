//! copd-export
//!
//! Printable assessment report. A [`ReportSnapshot`] freezes the record and
//! everything derived from it at a given date; templates are rendered with
//! Tera.

pub mod error;
pub mod render;
pub mod snapshot;

pub use error::ExportError;
pub use render::{load_template, render_report, render_report_with};
pub use snapshot::ReportSnapshot;
