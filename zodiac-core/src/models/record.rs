use serde::{Deserialize, Serialize};

use super::ZodiacSign;

/// One catalog row after normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogRecord {
    pub date_range: String,
    pub element: String,
    pub recommended_plants: Vec<String>,
    pub why_suitable: String,
    pub source_urls: Vec<String>,
}

/// Wire shape returned by `POST /recommend`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub zodiac: ZodiacSign,
    pub date_range: String,
    pub element: String,
    pub recommended_plants: Vec<String>,
    pub why_suitable: String,
    pub source_urls: Vec<String>,
}

impl Recommendation {
    pub fn new(zodiac: ZodiacSign, record: &CatalogRecord) -> Self {
        Self {
            zodiac,
            date_range: record.date_range.clone(),
            element: record.element.clone(),
            recommended_plants: record.recommended_plants.clone(),
            why_suitable: record.why_suitable.clone(),
            source_urls: record.source_urls.clone(),
        }
    }
}
