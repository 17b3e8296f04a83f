use serde::{Deserialize, Serialize};
use serde_json::Number;

/// An anonymous visitor comment. Either field may be blank, but never both.
///
/// `rating` keeps the number exactly as the client sent it, so `4` and
/// `4.5` both come back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment: String,
    pub rating: Number,
}
