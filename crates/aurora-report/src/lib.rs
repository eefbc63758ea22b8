//! aurora-report — Exports for a search run:
//!   - CSV table download
//!   - A4 PDF report
//!   - SVG bar charts (activity, safety, composite score)

pub mod error;
pub mod csv_export;
pub mod pdf;
pub mod charts;

pub use error::{ReportError, Result};
