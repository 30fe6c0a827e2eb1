use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::core::catalog::{CatalogError, CatalogResult};

pub const MIN_RATING: i32 = 1;
pub const MAX_RATING: i32 = 5;

// BookDraft is the transfer object for create and update input. It carries
// everything a Book has except the id, which the store assigns on create and
// the request path supplies on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl BookDraft {
    pub fn new(title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }

    // The store assumes well-formed input so the surrounding layer checks it here.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.title.trim().is_empty() {
            return Err(CatalogError::validation("title must not be blank", None));
        }
        if self.author.trim().is_empty() {
            return Err(CatalogError::validation("author must not be blank", None));
        }
        if self.category.trim().is_empty() {
            return Err(CatalogError::validation("category must not be blank", None));
        }
        if self.rating < MIN_RATING || self.rating > MAX_RATING {
            return Err(CatalogError::validation(
                format!("rating must be between {} and {}", MIN_RATING, MAX_RATING).as_str(), None));
        }
        Ok(())
    }

    pub fn build_book(&self, id: i64) -> Book {
        Book::new(id, self.title.as_str(), self.author.as_str(),
                  self.category.as_str(), self.rating)
    }
}
