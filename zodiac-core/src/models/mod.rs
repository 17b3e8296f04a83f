pub mod comment;
pub mod record;
pub mod sign;

pub use comment::Comment;
pub use record::{CatalogRecord, Recommendation};
pub use sign::{capitalize, ZodiacSign};
