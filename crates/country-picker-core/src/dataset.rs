// crates/country-picker-core/src/dataset.rs

//! # Dataset loading
//!
//! The bundled country list ships inside the crate as JSON and is parsed
//! once per process. Callers can also load a replacement dataset from a
//! path or construct one from records directly.

use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{PickerError, Result};
use crate::model::CountryRecord;

static BUNDLED_CACHE: OnceCell<CountryDataset> = OnceCell::new();

const BUNDLED_JSON: &str = include_str!("../data/countries.json");

/// The read-only country dataset backing directory construction and
/// auto-selection code mapping.
///
/// Record order is meaningful: the directory builder preserves it, and
/// the bundled data is ordered alphabetically by ISO2 code.
#[derive(Clone, Debug)]
pub struct CountryDataset {
    records: Vec<CountryRecord>,
}

impl CountryDataset {
    /// The dataset bundled with the crate, parsed once and cached.
    pub fn bundled() -> Result<&'static CountryDataset> {
        BUNDLED_CACHE.get_or_try_init(|| Self::from_json_str(BUNDLED_JSON))
    }

    /// Parse a dataset from a JSON array of country records.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<CountryRecord> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    /// Load a dataset from a JSON file on disk.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            PickerError::DatasetNotFound(format!("{}: {}", path.display(), e))
        })?;
        let reader = BufReader::new(file);
        let records: Vec<CountryRecord> = serde_json::from_reader(reader)?;
        Ok(Self::from_records(records))
    }

    /// Build a dataset from records, keeping the first entry per code.
    ///
    /// Deduplication here is what lets the directory guarantee that no
    /// code ever appears twice in a rendered list.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
        let records = records
            .into_iter()
            .filter(|r| seen.insert(r.code.to_ascii_uppercase()))
            .collect();
        Self { records }
    }

    /// All records in dataset order.
    pub fn records(&self) -> &[CountryRecord] {
        &self.records
    }

    /// Number of countries in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Find a record by ISO2 code, case-insensitive (e.g. "DE", "us").
    pub fn find(&self, code: &str) -> Option<&CountryRecord> {
        let code = code.trim();
        self.records
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }
}
