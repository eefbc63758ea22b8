//! One-table A4 PDF report of a shortlist.
//!
//! Built directly with lopdf: two standard Type1 fonts, one content stream per
//! page, WinAnsi-encoded strings.

use aurora_molecules::shortlist::ShortlistEntry;
use aurora_molecules::SearchRun;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};
use tracing::debug;

use crate::error::Result;

/// Points per centimetre.
const CM: f32 = 28.346_457;
const PAGE_WIDTH: f32 = 595.275_6;
const PAGE_HEIGHT: f32 = 841.889_8;

const BOLD: &str = "F1";
const REGULAR: &str = "F2";

/// Table columns: (x offset in cm, heading).
const COLUMNS: [(f32, &str); 5] = [
    (1.5, "#"),
    (2.5, "Molecule"),
    (8.0, "Activity"),
    (11.0, "Toxicity"),
    (14.0, "Composite"),
];

/// Header fields printed above the table.
#[derive(Debug, Clone)]
pub struct ReportHeader {
    pub title: String,
    pub target: String,
    pub max_toxicity: f64,
    pub run_id: String,
    pub started_at: String,
}

impl ReportHeader {
    pub fn for_run(title: &str, run: &SearchRun) -> Self {
        Self {
            title: title.to_string(),
            target: run.target.clone(),
            max_toxicity: run.max_toxicity,
            run_id: run.run_id.clone(),
            started_at: run.started_at_display(),
        }
    }
}

/// Render a run with the given title.
pub fn render_run(title: &str, run: &SearchRun) -> Result<Vec<u8>> {
    render(&ReportHeader::for_run(title, run), &run.shortlist)
}

/// Render the header block and the table, breaking pages when the cursor
/// falls below the bottom margin.
pub fn render(header: &ReportHeader, entries: &[ShortlistEntry]) -> Result<Vec<u8>> {
    let mut pages: Vec<Vec<Operation>> = Vec::new();
    let mut ops = Vec::new();

    text(&mut ops, BOLD, 13.0, 2.0 * CM, PAGE_HEIGHT - 2.0 * CM, &header.title);
    text(&mut ops, REGULAR, 10.5, 2.0 * CM, PAGE_HEIGHT - 3.0 * CM, &format!("Target: {}", header.target));
    text(
        &mut ops,
        REGULAR,
        10.5,
        2.0 * CM,
        PAGE_HEIGHT - 3.6 * CM,
        &format!(
            "Toxicity <= {:.2}; Top: {}; Run {}; {}",
            header.max_toxicity,
            entries.len(),
            header.run_id,
            header.started_at
        ),
    );

    let mut y = PAGE_HEIGHT - 5.0 * CM;
    for (x, heading) in COLUMNS {
        text(&mut ops, BOLD, 10.0, x * CM, y, heading);
    }
    y -= 0.7 * CM;

    for entry in entries {
        if y < 2.0 * CM {
            pages.push(std::mem::take(&mut ops));
            y = PAGE_HEIGHT - 2.0 * CM;
        }
        let r = &entry.record;
        let cells = [
            entry.rank.to_string(),
            r.name.clone(),
            format!("{:.2}", r.activity),
            format!("{:.2}", r.toxicity),
            format!("{:.2}", r.composite_score),
        ];
        for ((x, _), cell) in COLUMNS.iter().zip(cells.iter()) {
            text(&mut ops, REGULAR, 10.0, x * CM, y, cell);
        }
        y -= 0.6 * CM;
    }
    pages.push(ops);

    debug!("PDF report: {} rows on {} page(s)", entries.len(), pages.len());
    assemble(pages)
}

fn text(ops: &mut Vec<Operation>, font: &str, size: f32, x: f32, y: f32, value: &str) {
    ops.push(Operation::new("BT", vec![]));
    ops.push(Operation::new("Tf", vec![font.into(), size.into()]));
    ops.push(Operation::new("Td", vec![x.into(), y.into()]));
    ops.push(Operation::new("Tj", vec![Object::string_literal(win_ansi(value))]));
    ops.push(Operation::new("ET", vec![]));
}

fn assemble(pages: Vec<Vec<Operation>>) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let bold_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica-Bold",
        "Encoding" => "WinAnsiEncoding",
    });
    let regular_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            BOLD => bold_id,
            REGULAR => regular_id,
        },
    });

    let mut kids: Vec<Object> = Vec::with_capacity(pages.len());
    for operations in pages {
        let content = Content { operations };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(page_id.into());
    }

    let count = kids.len() as i64;
    let pages_dict = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => count,
        "Resources" => resources_id,
        "MediaBox" => vec![0.0f32.into(), 0.0f32.into(), PAGE_WIDTH.into(), PAGE_HEIGHT.into()],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages_dict));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);
    doc.compress();

    let mut buf = Vec::new();
    doc.save_to(&mut buf)?;
    Ok(buf)
}

/// Encode text for the standard fonts' WinAnsiEncoding.
/// Characters outside it become '?', except '≤' which is spelled "<=".
fn win_ansi(value: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(value.len());
    for c in value.chars() {
        match c {
            ' '..='~' => out.push(c as u8),
            '—' => out.push(0x97),
            '–' => out.push(0x96),
            '•' => out.push(0x95),
            '≤' => out.extend_from_slice(b"<="),
            '\u{a0}'..='\u{ff}' => out.push(c as u32 as u8),
            _ => out.push(b'?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurora_molecules::generate;
    use aurora_molecules::shortlist::shortlist;

    fn header() -> ReportHeader {
        ReportHeader {
            title: "Aurora BioLab — Candidate Shortlist".to_string(),
            target: "EGFR (non-small cell lung cancer)".to_string(),
            max_toxicity: 0.6,
            run_id: "123456".to_string(),
            started_at: "2026-10-15 09:30".to_string(),
        }
    }

    fn page_count(bytes: &[u8]) -> usize {
        Document::load_mem(bytes).unwrap().get_pages().len()
    }

    #[test]
    fn test_short_table_fits_one_page() {
        let pool = generate(10, 7).unwrap();
        let bytes = render(&header(), &shortlist(&pool, 0.6, 5)).unwrap();
        assert!(bytes.starts_with(b"%PDF-1.5"));
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_long_table_breaks_pages() {
        // 37 rows fit under the header block, 43 on each following page
        let pool = generate(60, 3).unwrap();
        let bytes = render(&header(), &shortlist(&pool, 1.0, 60)).unwrap();
        assert_eq!(page_count(&bytes), 2);

        let pool = generate(37, 3).unwrap();
        let bytes = render(&header(), &shortlist(&pool, 1.0, 37)).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_empty_table_still_renders() {
        let bytes = render(&header(), &[]).unwrap();
        assert_eq!(page_count(&bytes), 1);
    }

    #[test]
    fn test_win_ansi_encoding() {
        assert_eq!(win_ansi("Tox ≤ 0.60"), b"Tox <= 0.60".to_vec());
        assert_eq!(win_ansi("a — b"), vec![b'a', b' ', 0x97, b' ', b'b']);
        assert_eq!(win_ansi("Möller"), vec![b'M', 0xf6, b'l', b'l', b'e', b'r']);
        assert_eq!(win_ansi("→"), b"?".to_vec());
    }
}
