//! Floss reference catalog: the read-only list of thread colors every query
//! runs against.
//!
//! Entries are validated and normalized once at load time. Hex strings are
//! stored as `#RRGGBB` uppercase and the RGB channels are pre-computed so
//! ranking never re-parses hex.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::color::Rgb;
use crate::errors::CatalogError;
use crate::math;

static DMC_JSON: &str = include_str!("../data/dmc_floss.json");

/// One catalog record as it appears in JSON.
///
/// The DMC data file names the code `floss`; `code` is accepted too. Channels
/// are optional and derived from `hex` when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlossRecord {
    #[serde(alias = "floss")]
    pub code: String,
    pub name: String,
    pub hex: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub r: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub g: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub b: Option<u8>,
}

/// A validated floss color.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorEntry {
    code: String,
    name: String,
    hex: String,
    rgb: Rgb,
}

impl ColorEntry {
    /// Catalog identifier, e.g. `"310"` or `"B5200"`.
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized `#RRGGBB`, uppercase.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    pub fn rgb(&self) -> Rgb {
        self.rgb
    }

    fn from_record(index: usize, record: FlossRecord) -> Result<Self, CatalogError> {
        let code = record.code.trim().to_string();
        if code.is_empty() {
            return Err(CatalogError::EmptyCode { index });
        }
        let raw_hex = record.hex.trim();
        let (hex, rgb) = match (math::normalize_hex(raw_hex), Rgb::from_hex(raw_hex)) {
            (Some(hex), Some(rgb)) => (hex, rgb),
            _ => {
                return Err(CatalogError::InvalidHex {
                    code,
                    hex: record.hex,
                })
            }
        };
        if let (Some(r), Some(g), Some(b)) = (record.r, record.g, record.b) {
            if Rgb::new(r, g, b) != rgb {
                return Err(CatalogError::ChannelMismatch { code, hex, r, g, b });
            }
        }
        Ok(Self {
            code,
            name: record.name,
            hex,
            rgb,
        })
    }
}

/// Immutable, ordered floss catalog.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<ColorEntry>,
}

impl Catalog {
    /// Build a catalog from raw records, keeping their order.
    ///
    /// # Errors
    /// Fails on an empty or duplicate code, a hex that is not six digits, or
    /// explicit channels that disagree with the hex.
    pub fn from_records(records: Vec<FlossRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(records.len());
        let mut entries = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let entry = ColorEntry::from_record(index, record)?;
            if !seen.insert(entry.code.clone()) {
                return Err(CatalogError::DuplicateCode { code: entry.code });
            }
            entries.push(entry);
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of floss records.
    ///
    /// # Errors
    /// Returns [`CatalogError::Json`] for malformed JSON, or any validation
    /// error from [`Catalog::from_records`].
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<FlossRecord> = serde_json::from_str(json)?;
        let catalog = Self::from_records(records).inspect_err(|err| {
            log::warn!("floss catalog rejected: {err}");
        })?;
        log::debug!("loaded floss catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// The embedded DMC stranded cotton catalog.
    ///
    /// # Errors
    /// Only fails if the bundled data file is corrupt.
    pub fn dmc() -> Result<Self, CatalogError> {
        Self::from_json(DMC_JSON)
    }

    pub fn entries(&self) -> &[ColorEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ColorEntry> {
        self.entries.iter()
    }

    /// Look up an entry by exact floss code.
    pub fn get(&self, code: &str) -> Option<&ColorEntry> {
        self.entries.iter().find(|e| e.code == code)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ColorEntry;
    type IntoIter = std::slice::Iter<'a, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
