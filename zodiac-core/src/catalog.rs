//! Plant catalog loaded once at startup from a CSV file.
//!
//! Expected header:
//! `zodiac_sign,date_range,element,recommended_plants,why_suitable,source_urls`
//!
//! `recommended_plants` and `source_urls` are `|`-separated lists.

use std::collections::BTreeMap;
use std::io;
use std::path::Path;

use serde::Deserialize;

use crate::error::ZodiacError;
use crate::models::{capitalize, CatalogRecord, ZodiacSign};

pub const REQUIRED_COLUMNS: [&str; 6] = [
    "zodiac_sign",
    "date_range",
    "element",
    "recommended_plants",
    "why_suitable",
    "source_urls",
];

const LIST_SEPARATOR: char = '|';

#[derive(Debug, Deserialize)]
struct CatalogRow {
    zodiac_sign: String,
    date_range: String,
    element: String,
    recommended_plants: String,
    why_suitable: String,
    source_urls: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    records: BTreeMap<ZodiacSign, CatalogRecord>,
}

impl Catalog {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ZodiacError> {
        let path = path.as_ref();
        let reader = reader_builder()
            .from_path(path)
            .map_err(|source| ZodiacError::CatalogCsv {
                path: path.to_path_buf(),
                source,
            })?;
        let catalog = Self::from_csv(reader, path)?;
        tracing::info!(
            path = %path.display(),
            signs = catalog.len(),
            "plant catalog loaded"
        );
        Ok(catalog)
    }

    pub fn from_reader<R: io::Read>(rdr: R, source_name: &str) -> Result<Self, ZodiacError> {
        Self::from_csv(reader_builder().from_reader(rdr), Path::new(source_name))
    }

    fn from_csv<R: io::Read>(mut reader: csv::Reader<R>, path: &Path) -> Result<Self, ZodiacError> {
        let csv_err = |source: csv::Error| ZodiacError::CatalogCsv {
            path: path.to_path_buf(),
            source,
        };

        let headers = reader.headers().map_err(csv_err)?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|h| h == column) {
                return Err(ZodiacError::MissingColumn {
                    path: path.to_path_buf(),
                    column,
                });
            }
        }

        let mut records = BTreeMap::new();
        for (idx, row) in reader.deserialize::<CatalogRow>().enumerate() {
            let row = row.map_err(csv_err)?;
            let row_number = idx as u64 + 1;
            let name = capitalize(&row.zodiac_sign);
            let sign: ZodiacSign = name.parse().map_err(|_| ZodiacError::UnknownSign {
                path: path.to_path_buf(),
                row: row_number,
                sign: row.zodiac_sign.clone(),
            })?;

            let record = CatalogRecord {
                date_range: row.date_range,
                element: row.element,
                recommended_plants: split_list(&row.recommended_plants),
                why_suitable: row.why_suitable,
                source_urls: split_list(&row.source_urls),
            };
            if records.insert(sign, record).is_some() {
                tracing::warn!(%sign, row = row_number, "duplicate catalog row replaces earlier entry");
            }
        }

        let catalog = Self { records };
        let missing = catalog.missing_signs();
        if !missing.is_empty() {
            tracing::warn!(?missing, path = %path.display(), "catalog has no entry for some signs");
        }
        Ok(catalog)
    }

    pub fn get(&self, sign: ZodiacSign) -> Option<&CatalogRecord> {
        self.records.get(&sign)
    }

    pub fn contains(&self, sign: ZodiacSign) -> bool {
        self.records.contains_key(&sign)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ZodiacSign, &CatalogRecord)> {
        self.records.iter().map(|(sign, record)| (*sign, record))
    }

    pub fn missing_signs(&self) -> Vec<ZodiacSign> {
        ZodiacSign::ALL
            .into_iter()
            .filter(|sign| !self.records.contains_key(sign))
            .collect()
    }
}

fn reader_builder() -> csv::ReaderBuilder {
    let mut builder = csv::ReaderBuilder::new();
    builder.trim(csv::Trim::Headers);
    builder
}

/// Split a `|`-separated cell, trimming each item and dropping blanks.
fn split_list(cell: &str) -> Vec<String> {
    cell.split(LIST_SEPARATOR)
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}
