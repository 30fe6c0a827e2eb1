use std::sync::Arc;
use axum::http::StatusCode;
use crate::books::factory::create_book_store;
use crate::books::store::CatalogStore;
use crate::core::command::CommandError;
use crate::core::domain::Configuration;

#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Configuration,
    pub store: Arc<CatalogStore>,
}

impl AppState {
    // the store is created once here and shared by every request
    pub fn new(config: &Configuration) -> AppState {
        AppState {
            config: config.clone(),
            store: create_book_store(true),
        }
    }
}

pub type ServerError = (StatusCode, String);

pub fn json_to_server_error(err: serde_json::Error) -> ServerError {
    (StatusCode::BAD_REQUEST, format!("{}", err))
}

impl From<CommandError> for ServerError {
    fn from(err: CommandError) -> Self {
        match err {
            CommandError::NotFound { .. } => {
                (StatusCode::NOT_FOUND, format!("{:?}", err))
            }
            CommandError::Validation { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Serialization { .. } => {
                (StatusCode::BAD_REQUEST, format!("{:?}", err))
            }
            CommandError::Runtime { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
            CommandError::Other { .. } => {
                (StatusCode::INTERNAL_SERVER_ERROR, format!("{:?}", err))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use crate::core::command::CommandError;
    use crate::core::controller::ServerError;

    #[tokio::test]
    async fn test_should_map_not_found_to_404() {
        let err: ServerError = CommandError::NotFound { message: "test".to_string() }.into();
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }

    #[tokio::test]
    async fn test_should_map_validation_to_400() {
        let err: ServerError = CommandError::Validation { message: "test".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_map_runtime_to_500() {
        let err: ServerError = CommandError::Runtime { message: "test".to_string(), reason_code: None }.into();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, err.0);
    }
}
