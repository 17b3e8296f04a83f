use chrono::NaiveDate;
use serde_json::Value;

use crate::catalog::Catalog;
use crate::classifier::classify_date;
use crate::error::RecommendError;
use crate::models::{Recommendation, ZodiacSign};

pub const BIRTHDATE_FORMAT: &str = "%Y-%m-%d";

/// What the caller asked for. `birthdate` wins when a body carries both keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecommendQuery {
    Birthdate(String),
    Zodiac(String),
}

impl RecommendQuery {
    /// Interpret a JSON request body. Key presence picks the branch; a value
    /// of the wrong type fails as that branch's validation error.
    pub fn from_json(body: &Value) -> Result<Self, RecommendError> {
        let Some(obj) = body.as_object() else {
            return Err(RecommendError::MissingData);
        };

        if let Some(value) = obj.get("birthdate") {
            return value
                .as_str()
                .map(|s| RecommendQuery::Birthdate(s.to_string()))
                .ok_or(RecommendError::InvalidDateFormat);
        }
        if let Some(value) = obj.get("zodiac") {
            return value
                .as_str()
                .map(|s| RecommendQuery::Zodiac(s.to_string()))
                .ok_or(RecommendError::InvalidZodiacSign);
        }
        Err(RecommendError::MissingData)
    }
}

pub fn parse_birthdate(input: &str) -> Result<NaiveDate, RecommendError> {
    NaiveDate::parse_from_str(input, BIRTHDATE_FORMAT).map_err(|_| RecommendError::InvalidDateFormat)
}

/// Resolve the query to a sign without touching catalog contents beyond
/// membership checks for free-form sign names.
pub fn resolve_sign(query: &RecommendQuery, catalog: &Catalog) -> Result<ZodiacSign, RecommendError> {
    match query {
        RecommendQuery::Birthdate(raw) => {
            let date = parse_birthdate(raw)?;
            classify_date(date).ok_or(RecommendError::InvalidBirthdate)
        }
        RecommendQuery::Zodiac(raw) => ZodiacSign::from_input(raw)
            .filter(|sign| catalog.contains(*sign))
            .ok_or(RecommendError::InvalidZodiacSign),
    }
}

pub fn recommend(query: &RecommendQuery, catalog: &Catalog) -> Result<Recommendation, RecommendError> {
    let sign = resolve_sign(query, catalog)?;
    let record = catalog
        .get(sign)
        .ok_or(RecommendError::UnrecognizedZodiacSign)?;
    Ok(Recommendation::new(sign, record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn catalog() -> Catalog {
        let csv = "zodiac_sign,date_range,element,recommended_plants,why_suitable,source_urls\n\
Aries,March 21 - April 19,Fire,Cactus|Red Tulip,Bold,https://a.example\n\
Leo,July 23 - August 22,Fire,Sunflower|Marigold,Sunny,https://l.example|https://m.example\n";
        Catalog::from_reader(csv.as_bytes(), "test.csv").unwrap()
    }

    fn run(body: Value) -> Result<Recommendation, RecommendError> {
        let query = RecommendQuery::from_json(&body)?;
        recommend(&query, &catalog())
    }

    #[test]
    fn birthdate_resolves_through_classifier() {
        let rec = run(json!({"birthdate": "2024-04-10"})).unwrap();
        assert_eq!(rec.zodiac, ZodiacSign::Aries);
        assert_eq!(rec.date_range, "March 21 - April 19");
        assert_eq!(rec.recommended_plants, vec!["Cactus", "Red Tulip"]);
    }

    #[test]
    fn zodiac_is_case_normalized() {
        let rec = run(json!({"zodiac": "leo"})).unwrap();
        assert_eq!(rec.zodiac, ZodiacSign::Leo);
        assert_eq!(rec.source_urls, vec!["https://l.example", "https://m.example"]);
    }

    #[test]
    fn birthdate_takes_precedence_over_zodiac() {
        let rec = run(json!({"zodiac": "leo", "birthdate": "2000-03-25"})).unwrap();
        assert_eq!(rec.zodiac, ZodiacSign::Aries);
    }

    #[test]
    fn unparseable_birthdate_is_invalid_format() {
        assert_eq!(run(json!({"birthdate": "not-a-date"})), Err(RecommendError::InvalidDateFormat));
        assert_eq!(run(json!({"birthdate": "2024-02-30"})), Err(RecommendError::InvalidDateFormat));
        assert_eq!(run(json!({"birthdate": 20240410})), Err(RecommendError::InvalidDateFormat));
    }

    #[test]
    fn unknown_zodiac_is_invalid() {
        assert_eq!(run(json!({"zodiac": "Martian"})), Err(RecommendError::InvalidZodiacSign));
        assert_eq!(run(json!({"zodiac": null})), Err(RecommendError::InvalidZodiacSign));
    }

    #[test]
    fn sign_missing_from_catalog_by_name_is_invalid() {
        // A real sign, but this catalog has no row for it.
        assert_eq!(run(json!({"zodiac": "virgo"})), Err(RecommendError::InvalidZodiacSign));
    }

    #[test]
    fn sign_missing_from_catalog_by_date_is_unrecognized() {
        assert_eq!(
            run(json!({"birthdate": "1990-09-01"})),
            Err(RecommendError::UnrecognizedZodiacSign)
        );
    }

    #[test]
    fn empty_or_non_object_body_is_missing_data() {
        assert_eq!(run(json!({})), Err(RecommendError::MissingData));
        assert_eq!(run(json!({"sign": "leo"})), Err(RecommendError::MissingData));
        assert_eq!(run(json!([1, 2])), Err(RecommendError::MissingData));
    }

    #[test]
    fn error_messages_match_wire_contract() {
        assert_eq!(RecommendError::InvalidBirthdate.to_string(), "Invalid birthdate");
        assert_eq!(RecommendError::InvalidDateFormat.to_string(), "Invalid date format");
        assert_eq!(RecommendError::InvalidZodiacSign.to_string(), "Invalid zodiac sign");
        assert_eq!(RecommendError::MissingData.to_string(), "Missing data");
        assert_eq!(
            RecommendError::UnrecognizedZodiacSign.to_string(),
            "Zodiac sign not recognized"
        );
    }
}
