use std::fmt;
use std::fmt::{Display, Formatter};

#[derive(Debug)]
pub enum CatalogError {
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
}

impl CatalogError {
    pub fn not_found(message: &str) -> CatalogError {
        CatalogError::NotFound { message: message.to_string() }
    }

    pub fn validation(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Validation { message: message.to_string(), reason_code }
    }

    pub fn serialization(message: &str) -> CatalogError {
        CatalogError::Serialization { message: message.to_string() }
    }

    pub fn runtime(message: &str, reason_code: Option<String>) -> CatalogError {
        CatalogError::Runtime { message: message.to_string(), reason_code }
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        CatalogError::serialization(
            format!("serde json parsing {:?}", err).as_str())
    }
}

impl Display for CatalogError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::NotFound { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Validation { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
            CatalogError::Serialization { message } => {
                write!(f, "{}", message)
            }
            CatalogError::Runtime { message, reason_code } => {
                write!(f, "{} {:?}", message, reason_code)
            }
        }
    }
}

/// A specialized Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use crate::core::catalog::CatalogError;

    #[tokio::test]
    async fn test_should_create_not_found_error() {
        assert!(matches!(CatalogError::not_found("test"), CatalogError::NotFound{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_validation_error() {
        assert!(matches!(CatalogError::validation("test", None), CatalogError::Validation{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_create_serialization_error() {
        assert!(matches!(CatalogError::serialization("test"), CatalogError::Serialization{ message: _ }));
    }

    #[tokio::test]
    async fn test_should_create_runtime_error() {
        assert!(matches!(CatalogError::runtime("test", None), CatalogError::Runtime{ message: _, reason_code: _ }));
    }

    #[tokio::test]
    async fn test_should_format_errors() {
        assert_eq!("no book", CatalogError::not_found("no book").to_string());
        assert_eq!("bad input None", CatalogError::validation("bad input", None).to_string());
    }
}
