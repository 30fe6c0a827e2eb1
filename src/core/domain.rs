use serde::{Deserialize, Serialize};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

// Configuration abstracts config options for the catalog service
#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Configuration {
    pub bind_addr: String,
}

impl Configuration {
    pub fn new(bind_addr: &str) -> Self {
        Configuration {
            bind_addr: bind_addr.to_string(),
        }
    }

    // BIND_ADDR env var overrides the default listen address
    pub fn from_env() -> Self {
        match std::env::var("BIND_ADDR") {
            Ok(addr) if !addr.is_empty() => Configuration::new(addr.as_str()),
            _ => Configuration::new(DEFAULT_BIND_ADDR),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_build_config() {
        let config = Configuration::new("127.0.0.1:3000");
        assert_eq!("127.0.0.1:3000", config.bind_addr.as_str());
    }
}
