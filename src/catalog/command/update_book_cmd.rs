use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// book_id comes from the request path, the rest from the body
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    pub book_id: i64,
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl UpdateBookCommandRequest {
    pub fn new(book_id: i64, title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            book_id,
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }

    pub fn validate(&self) -> Result<(), CommandError> {
        if self.book_id < 1 {
            return Err(CommandError::Validation {
                message: format!("book id must be positive, got {}", self.book_id),
                reason_code: None,
            });
        }
        Ok(())
    }

    pub fn build_draft(&self) -> BookDraft {
        BookDraft::new(self.title.as_str(), self.author.as_str(),
                       self.category.as_str(), self.rating)
    }
}

// book is None when no record matched the id; the miss is not an error
#[derive(Debug, Serialize)]
pub struct UpdateBookCommandResponse {
    pub book: Option<Book>,
}

impl UpdateBookCommandResponse {
    pub fn new(book: Option<Book>) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        req.validate()?;
        let draft = req.build_draft();
        draft.validate().map_err(CommandError::from)?;
        self.catalog_service.update_book(req.book_id, &draft)
            .await.map_err(CommandError::from).map(UpdateBookCommandResponse::new)
    }
}
