use std::path::PathBuf;

use thiserror::Error;

/// Fatal catalog load failures; any of these aborts startup.
#[derive(Error, Debug)]
pub enum ZodiacError {
    #[error("Catalog load failed for {}: {source}", path.display())]
    CatalogCsv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Catalog {} is missing required column '{column}'", path.display())]
    MissingColumn { path: PathBuf, column: &'static str },

    #[error("Catalog {} row {row}: unknown zodiac sign '{sign}'", path.display())]
    UnknownSign { path: PathBuf, row: u64, sign: String },
}

/// Request-level failures of the recommendation lookup. The display strings
/// are returned verbatim to HTTP clients.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecommendError {
    #[error("Invalid date format")]
    InvalidDateFormat,

    #[error("Invalid birthdate")]
    InvalidBirthdate,

    #[error("Invalid zodiac sign")]
    InvalidZodiacSign,

    #[error("Missing data")]
    MissingData,

    #[error("Zodiac sign not recognized")]
    UnrecognizedZodiacSign,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommentError {
    #[error("Empty comment and rating")]
    EmptyCommentAndRating,
}
