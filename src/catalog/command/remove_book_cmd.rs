use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct RemoveBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl RemoveBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RemoveBookCommandRequest {
    pub book_id: i64,
}

impl RemoveBookCommandRequest {
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

// removed is false when no record matched the id; the miss is not an error
#[derive(Debug, Serialize)]
pub struct RemoveBookCommandResponse {
    pub removed: bool,
}

impl RemoveBookCommandResponse {
    pub fn new(removed: bool) -> Self {
        Self {
            removed,
        }
    }
}

#[async_trait]
impl Command<RemoveBookCommandRequest, RemoveBookCommandResponse> for RemoveBookCommand {
    async fn execute(&self, req: RemoveBookCommandRequest) -> Result<RemoveBookCommandResponse, CommandError> {
        req.validate()?;
        self.catalog_service.remove_book(req.book_id)
            .await.map_err(CommandError::from).map(RemoveBookCommandResponse::new)
    }
}
