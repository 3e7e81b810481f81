//! Delimited manifest parsing
//!
//! Reads the manifest export (`codigo_barra`, `cantidad`, `ciudad`,
//! `codigos_adicionales`) into raw rows. Columns are matched by header name,
//! so extra or reordered columns are fine; missing ones read as empty.

use csv::{ReaderBuilder, StringRecord};

use crate::core::models::RawManifestRow;

/// Primary code column
pub const COL_CODE: &str = "codigo_barra";
/// Expected quantity column
pub const COL_QUANTITY: &str = "cantidad";
/// City column
pub const COL_CITY: &str = "ciudad";
/// Comma-joined aliases column
pub const COL_ALIASES: &str = "codigos_adicionales";

struct Columns {
    code: Option<usize>,
    quantity: Option<usize>,
    city: Option<usize>,
    aliases: Option<usize>,
}

impl Columns {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_matches('\u{feff}').trim().eq_ignore_ascii_case(name))
        };
        Self {
            code: find(COL_CODE),
            quantity: find(COL_QUANTITY),
            city: find(COL_CITY),
            aliases: find(COL_ALIASES),
        }
    }
}

fn field(record: &StringRecord, index: Option<usize>) -> String {
    index.and_then(|i| record.get(i)).unwrap_or("").to_string()
}

/// Parse manifest text into raw rows
///
/// A header row is required. Blank lines and rows with every cell empty are
/// skipped.
pub fn parse_manifest(text: &str) -> Result<Vec<RawManifestRow>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(text.as_bytes());

    let columns = Columns::from_headers(reader.headers()?);
    if columns.code.is_none() {
        log::warn!("manifest has no {COL_CODE} column");
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        rows.push(RawManifestRow {
            primary_code: field(&record, columns.code),
            quantity: field(&record, columns.quantity),
            city: field(&record, columns.city),
            additional_codes: field(&record, columns.aliases),
        });
    }

    log::debug!("parsed {} manifest rows", rows.len());
    Ok(rows)
}
