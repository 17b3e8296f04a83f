pub mod catalog;
pub mod classifier;
pub mod comments;
pub mod config;
pub mod error;
pub mod models;
pub mod recommend;
pub mod service;

pub use catalog::Catalog;
pub use classifier::{classify, classify_date};
pub use comments::CommentStore;
pub use config::ZodiacConfig;
pub use error::{CommentError, RecommendError, ZodiacError};
pub use models::{CatalogRecord, Comment, Recommendation, ZodiacSign};
pub use recommend::RecommendQuery;
pub use service::PlantService;
