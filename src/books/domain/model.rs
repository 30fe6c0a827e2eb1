use serde::{Deserialize, Serialize};

// Book abstracts a single catalog entry. The id is assigned by the store and
// never taken from a caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl Book {
    pub fn new(id: i64, title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }

    // category comparison is case-insensitive throughout the catalog
    pub fn matches_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
