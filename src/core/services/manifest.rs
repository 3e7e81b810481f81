//! Manifest load
//!
//! Turns raw manifest rows into a fresh session. All coercion of untrusted
//! row text happens here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::core::models::{ManifestItem, RawManifestRow, SessionState};

/// What happened while loading a manifest
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Items in the new manifest
    pub items: usize,
    /// Sum of expected quantities
    pub total_expected: u64,
    /// Primary codes whose quantity could not be parsed (loaded as 0)
    pub quantity_parse_failures: Vec<String>,
    /// Rows without a primary code (loaded, but only reachable by alias)
    pub blank_code_rows: usize,
    /// Codes that resolve to more than one item (first one wins on scan)
    pub colliding_codes: Vec<String>,
}

/// Parse a quantity cell the lenient way spreadsheets export them
///
/// Leading decimal digits are read (`"12"`, `"12 und"`, `"3.0"` all count);
/// anything without leading digits, or that overflows, is `None`.
#[must_use]
pub fn parse_quantity(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let digits_len = unsigned.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }
    unsigned[..digits_len].parse().ok()
}

/// Split the additional-codes cell into trimmed, non-empty aliases
fn split_aliases(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(String::from)
}

/// Replace the session with a freshly loaded manifest
///
/// The new state is built in full before it is swapped in, so readers never
/// observe a half-loaded manifest. Counters start from zero; the correct and
/// incorrect logs carry over, since only finishing the session clears them.
///
/// Rows without a primary code are kept and count toward the expected total,
/// but can only be scanned through their aliases.
pub fn load_manifest(
    state: &mut SessionState,
    rows: Vec<RawManifestRow>,
    source: Option<String>,
) -> LoadSummary {
    let mut summary = LoadSummary::default();
    let mut manifest = Vec::with_capacity(rows.len());

    for row in rows {
        let primary_code = row.primary_code.trim().to_string();
        if primary_code.is_empty() {
            log::warn!("manifest row without a barcode (quantity {:?})", row.quantity);
            summary.blank_code_rows += 1;
        }

        let quantity = parse_quantity(&row.quantity).unwrap_or_else(|| {
            log::warn!("unparsable quantity {:?} for {primary_code}, using 0", row.quantity);
            summary.quantity_parse_failures.push(primary_code.clone());
            0
        });

        manifest.push(ManifestItem::new(
            primary_code,
            quantity,
            row.city.trim().to_string(),
            split_aliases(&row.additional_codes),
        ));
    }

    summary.colliding_codes = colliding_codes(&manifest);
    if !summary.colliding_codes.is_empty() {
        log::warn!(
            "codes shared by several manifest items (first match wins): {}",
            summary.colliding_codes.join(", ")
        );
    }

    let progress_by_code = manifest.iter().map(|item| (item.primary_code.clone(), 0)).collect();
    let total_expected = manifest.iter().map(|item| u64::from(item.expected_quantity)).sum();

    summary.items = manifest.len();
    summary.total_expected = total_expected;

    *state = SessionState {
        manifest,
        progress_by_code,
        global_accepted: 0,
        total_expected,
        correct_log: std::mem::take(&mut state.correct_log),
        incorrect_log: std::mem::take(&mut state.incorrect_log),
        source,
    };

    log::info!("loaded {} manifest items, {} units expected", summary.items, total_expected);
    summary
}

fn colliding_codes(manifest: &[ManifestItem]) -> Vec<String> {
    let mut owners: BTreeMap<&str, usize> = BTreeMap::new();
    for item in manifest {
        for code in item.valid_codes.iter().filter(|code| !code.is_empty()) {
            *owners.entry(code.as_str()).or_default() += 1;
        }
    }
    owners
        .into_iter()
        .filter(|&(_, count)| count > 1)
        .map(|(code, _)| code.to_string())
        .collect()
}
