//! Shortlist table as CSV.

use aurora_molecules::shortlist::ShortlistEntry;
use serde::Serialize;
use std::io::Write;

use crate::error::{ReportError, Result};

/// The rank column is headed "#" rather than left blank.
pub const CSV_HEADER: [&str; 6] = ["#", "Molecule", "Activity", "Toxicity", "Composite score", "Status"];

#[derive(Serialize)]
struct CsvRow<'a> {
    rank: usize,
    molecule: &'a str,
    activity: String,
    toxicity: String,
    composite_score: String,
    status: &'a str,
}

impl<'a> From<&'a ShortlistEntry> for CsvRow<'a> {
    fn from(entry: &'a ShortlistEntry) -> Self {
        let r = &entry.record;
        Self {
            rank: entry.rank,
            molecule: &r.name,
            activity: format!("{:.2}", r.activity),
            toxicity: format!("{:.2}", r.toxicity),
            composite_score: format!("{:.2}", r.composite_score),
            status: r.status.as_str(),
        }
    }
}

/// Write the header and one row per entry. The header is written even for an
/// empty shortlist.
pub fn write_csv<W: Write>(entries: &[ShortlistEntry], writer: W) -> Result<W> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for entry in entries {
        wtr.serialize(CsvRow::from(entry))?;
    }
    wtr.flush()?;

    wtr.into_inner().map_err(|e| ReportError::Io(e.into_error()))
}

pub fn to_csv(entries: &[ShortlistEntry]) -> Result<Vec<u8>> {
    write_csv(entries, Vec::new())
}
