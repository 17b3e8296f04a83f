use std::sync::{Arc, RwLock};

use serde_json::Number;

use crate::error::CommentError;
use crate::models::Comment;

/// Process-lifetime, append-only comment list. Clones share the same list.
#[derive(Debug, Clone, Default)]
pub struct CommentStore {
    inner: Arc<RwLock<Vec<Comment>>>,
}

impl CommentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a comment when the trimmed text is non-empty or the rating is
    /// positive. The trimmed text is what gets stored.
    pub fn add(&self, comment: &str, rating: Number) -> Result<(), CommentError> {
        let comment = comment.trim();
        if comment.is_empty() && !is_positive(&rating) {
            return Err(CommentError::EmptyCommentAndRating);
        }

        let mut list = self.inner.write().unwrap_or_else(|poisoned| poisoned.into_inner());
        list.push(Comment {
            comment: comment.to_string(),
            rating: rating.clone(),
        });
        tracing::debug!(total = list.len(), %rating, "comment stored");
        Ok(())
    }

    /// Snapshot in insertion order.
    pub fn list(&self) -> Vec<Comment> {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn len(&self) -> usize {
        self.inner
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_positive(rating: &Number) -> bool {
    rating.as_f64().is_some_and(|r| r > 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(v: i64) -> Number {
        Number::from(v)
    }

    fn float(v: f64) -> Number {
        Number::from_f64(v).unwrap()
    }

    #[test]
    fn rejects_blank_comment_without_rating() {
        let store = CommentStore::new();
        assert_eq!(store.add("", num(0)), Err(CommentError::EmptyCommentAndRating));
        assert_eq!(store.add("   \n", num(0)), Err(CommentError::EmptyCommentAndRating));
        assert_eq!(store.add("", num(-3)), Err(CommentError::EmptyCommentAndRating));
        assert!(store.is_empty());
    }

    #[test]
    fn accepts_text_or_positive_rating() {
        let store = CommentStore::new();
        store.add("Nice", num(0)).unwrap();
        store.add("", num(4)).unwrap();
        store.add("  Lovely ferns  ", num(5)).unwrap();

        assert_eq!(
            store.list(),
            vec![
                Comment { comment: "Nice".into(), rating: num(0) },
                Comment { comment: "".into(), rating: num(4) },
                Comment { comment: "Lovely ferns".into(), rating: num(5) },
            ]
        );
    }

    #[test]
    fn fractional_ratings_are_kept_as_sent() {
        let store = CommentStore::new();
        store.add("", float(4.5)).unwrap();
        store.add("", float(0.25)).unwrap();
        assert_eq!(store.add("", float(-0.5)), Err(CommentError::EmptyCommentAndRating));
        assert_eq!(store.add("", float(0.0)), Err(CommentError::EmptyCommentAndRating));

        let ratings: Vec<_> = store.list().into_iter().map(|c| c.rating.to_string()).collect();
        assert_eq!(ratings, vec!["4.5", "0.25"]);
    }

    #[test]
    fn list_is_idempotent() {
        let store = CommentStore::new();
        store.add("first", num(1)).unwrap();
        assert_eq!(store.list(), store.list());
    }

    #[test]
    fn clones_share_the_same_list() {
        let store = CommentStore::new();
        let handle = store.clone();
        handle.add("shared", num(0)).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn concurrent_appends_are_all_kept() {
        let store = CommentStore::new();
        let threads: Vec<_> = (0..8)
            .map(|t| {
                let store = store.clone();
                std::thread::spawn(move || {
                    for i in 0..50 {
                        store.add(&format!("t{t}-{i}"), num(1)).unwrap();
                    }
                })
            })
            .collect();
        for t in threads {
            t.join().unwrap();
        }
        assert_eq!(store.len(), 400);
    }
}
