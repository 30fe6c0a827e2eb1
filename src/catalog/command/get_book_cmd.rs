use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct GetBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GetBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GetBookCommandRequest {
    pub book_id: i64,
}

impl GetBookCommandRequest {
    pub fn new(book_id: i64) -> Self {
        Self {
            book_id,
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
}

#[derive(Debug, Serialize)]
pub struct GetBookCommandResponse {
    pub book: Book,
}

impl GetBookCommandResponse {
    pub fn new(book: Book) -> Self {
        Self {
            book,
        }
    }
}

#[async_trait]
impl Command<GetBookCommandRequest, GetBookCommandResponse> for GetBookCommand {
    async fn execute(&self, req: GetBookCommandRequest) -> Result<GetBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.find_book_by_id(req.book_id)
            .await.map_err(CommandError::from).map(GetBookCommandResponse::new)
    }
}
