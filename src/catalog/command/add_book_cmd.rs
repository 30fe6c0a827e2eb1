use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// the request body never carries an id; the store assigns one
#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub title: String,
    pub author: String,
    pub category: String,
    pub rating: i32,
}

impl AddBookCommandRequest {
    pub fn new(title: &str, author: &str, category: &str, rating: i32) -> Self {
        Self {
            title: title.to_string(),
            author: author.to_string(),
            category: category.to_string(),
            rating,
        }
    }

    pub fn build_draft(&self) -> BookDraft {
        BookDraft::new(self.title.as_str(), self.author.as_str(),
                       self.category.as_str(), self.rating)
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub book: Book,
}

impl AddBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let draft = req.build_draft();
        draft.validate().map_err(CommandError::from)?;
        self.catalog_service.add_book(&draft)
            .await.map_err(CommandError::from).map(AddBookCommandResponse::new)
    }
}
