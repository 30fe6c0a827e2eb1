use async_trait::async_trait;
use crate::core::catalog::CatalogError;

#[derive(Debug)]
pub enum CommandError {
    NotFound {
        message: String,
    },
    Validation {
        message: String,
        reason_code: Option<String>,
    },
    Serialization {
        message: String,
    },
    Runtime {
        message: String,
        reason_code: Option<String>,
    },
    Other {
        message: String,
        reason_code: Option<String>,
    },
}

#[async_trait]
pub trait Command<Request, Response> {
    async fn execute(&self, req: Request) -> Result<Response, CommandError>;
}

impl From<CatalogError> for CommandError {
    fn from(other: CatalogError) -> Self {
        match other {
            CatalogError::NotFound { message } => {
                CommandError::NotFound { message }
            }
            CatalogError::Validation { message, reason_code } => {
                CommandError::Validation { message, reason_code }
            }
            CatalogError::Serialization { message } => {
                CommandError::Serialization { message }
            }
            CatalogError::Runtime { message, reason_code } => {
                CommandError::Runtime { message, reason_code }
            }
        }
    }
}
