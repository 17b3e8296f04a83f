use std::path::Path;
use std::sync::Arc;

use serde_json::{Number, Value};

use crate::catalog::Catalog;
use crate::comments::CommentStore;
use crate::error::{CommentError, RecommendError, ZodiacError};
use crate::models::{Comment, Recommendation};
use crate::recommend::{recommend, RecommendQuery};

/// Everything a request handler needs: the immutable catalog and the shared
/// comment list. Cheap to clone.
#[derive(Debug, Clone)]
pub struct PlantService {
    catalog: Arc<Catalog>,
    comments: CommentStore,
}

impl PlantService {
    /// Load the catalog once and start with an empty comment list.
    pub fn init(catalog_path: impl AsRef<Path>) -> Result<Self, ZodiacError> {
        let catalog = Catalog::load(catalog_path)?;
        Ok(Self::new(catalog))
    }

    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(catalog),
            comments: CommentStore::new(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn recommend(&self, body: &Value) -> Result<Recommendation, RecommendError> {
        let query = RecommendQuery::from_json(body)?;
        recommend(&query, &self.catalog)
    }

    pub fn add_comment(&self, comment: &str, rating: Number) -> Result<(), CommentError> {
        self.comments.add(comment, rating)
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.comments.list()
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ZodiacSign;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn init_loads_catalog_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "zodiac_sign,date_range,element,recommended_plants,why_suitable,source_urls\n\
             Gemini,May 21 - June 20,Air,Ivy|Fern,Curious,https://g.example\n"
        )
        .unwrap();

        let service = PlantService::init(file.path()).unwrap();
        assert_eq!(service.catalog().len(), 1);

        let rec = service.recommend(&json!({"birthdate": "1999-06-01"})).unwrap();
        assert_eq!(rec.zodiac, ZodiacSign::Gemini);
        assert_eq!(rec.recommended_plants, vec!["Ivy", "Fern"]);
    }

    #[test]
    fn init_fails_for_missing_file() {
        assert!(PlantService::init("/nonexistent/catalog.csv").is_err());
    }

    #[test]
    fn clones_share_comments() {
        let service = PlantService::new(Catalog::default());
        let clone = service.clone();
        clone.add_comment("Nice", Number::from(0)).unwrap();
        assert_eq!(service.comments().len(), 1);
        assert_eq!(service.comment_count(), 1);
    }
}
