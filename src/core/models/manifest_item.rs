//! Manifest item model
//!
//! One expected product line of a delivery: the codes that identify it,
//! how many units must arrive, and what has been scanned so far.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An expected product line in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestItem {
    /// Canonical barcode for this line
    pub primary_code: String,

    /// Units that must be scanned to complete the line
    pub expected_quantity: u32,

    /// Destination city (informational)
    pub city: String,

    /// Every code that resolves to this line, primary code first
    pub valid_codes: Vec<String>,

    /// Sub-unit suffixes already accepted (never shrinks)
    pub scanned_subunits: BTreeSet<String>,

    /// Accepted scans that carried no suffix
    pub no_suffix_accepted: u32,
}

impl ManifestItem {
    /// Create a line with no scan progress
    ///
    /// The primary code is always the first valid code; aliases equal to it
    /// or to each other are dropped.
    #[must_use]
    pub fn new(
        primary_code: String,
        expected_quantity: u32,
        city: String,
        aliases: impl IntoIterator<Item = String>,
    ) -> Self {
        let mut valid_codes = vec![primary_code.clone()];
        for alias in aliases {
            if !valid_codes.contains(&alias) {
                valid_codes.push(alias);
            }
        }

        Self {
            primary_code,
            expected_quantity,
            city,
            valid_codes,
            scanned_subunits: BTreeSet::new(),
            no_suffix_accepted: 0,
        }
    }

    /// Whether a normalized main code resolves to this line
    ///
    /// An empty code never matches, so lines without a barcode are only
    /// reachable through their aliases.
    #[must_use]
    pub fn accepts(&self, main: &str) -> bool {
        !main.is_empty() && self.valid_codes.iter().any(|code| code == main)
    }
}

/// A manifest row as read from the source, before any coercion
///
/// Every field is raw text; `load_manifest` decides how to interpret it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawManifestRow {
    /// `codigo_barra` column
    pub primary_code: String,
    /// `cantidad` column
    pub quantity: String,
    /// `ciudad` column
    pub city: String,
    /// `codigos_adicionales` column (comma separated)
    pub additional_codes: String,
}

impl RawManifestRow {
    /// Build a row from its four columns
    #[must_use]
    pub fn new(
        primary_code: impl Into<String>,
        quantity: impl Into<String>,
        city: impl Into<String>,
        additional_codes: impl Into<String>,
    ) -> Self {
        Self {
            primary_code: primary_code.into(),
            quantity: quantity.into(),
            city: city.into(),
            additional_codes: additional_codes.into(),
        }
    }
}
