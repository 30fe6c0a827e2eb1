use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// DomainEventType defines type of event for catalog changes
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub enum DomainEventType {
    Added,
    Updated,
    Deleted,
}

// DomainEvent abstracts domain event for data changes
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_id: String,
    pub name: String,
    pub key: String,
    pub kind: DomainEventType,
    pub json_data: String,
    pub created_at: DateTime<Utc>,
}

impl DomainEvent {
    pub fn added<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Added, json))
    }

    pub fn updated<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Updated, json))
    }

    pub fn deleted<T: Serialize>(name: &str, key: &str, data: &T) -> serde_json::Result<Self> {
        let json = serde_json::to_string(&data)?;
        Ok(Self::build(name, key, DomainEventType::Deleted, json))
    }

    fn build(name: &str, key: &str, kind: DomainEventType, json: String) -> DomainEvent {
        DomainEvent {
            event_id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            key: key.to_string(),
            kind,
            json_data: json,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use crate::core::events::{DomainEvent, DomainEventType};

    #[tokio::test]
    async fn test_should_build_added() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::added("books", "1", &data).expect("build event");
        assert_eq!("books", event.name.as_str());
        assert_eq!("1", event.key.as_str());
        assert_eq!(DomainEventType::Added, event.kind);
    }

    #[tokio::test]
    async fn test_should_build_updated() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::updated("books", "1", &data).expect("build event");
        assert_eq!("books", event.name.as_str());
        assert_eq!(DomainEventType::Updated, event.kind);
    }

    #[tokio::test]
    async fn test_should_build_deleted() {
        let data = HashMap::from([("a", 1), ("b", 2)]);
        let event = DomainEvent::deleted("books", "1", &data).expect("build event");
        assert_eq!("1", event.key.as_str());
        assert_eq!(DomainEventType::Deleted, event.kind);
    }
}
