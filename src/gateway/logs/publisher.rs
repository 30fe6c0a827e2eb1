use async_trait::async_trait;
use tracing::log::info;
use crate::core::catalog::CatalogError;
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

// LogPublisher writes domain events to the structured log. With no broker in
// this deployment the log is the event stream.
#[derive(Debug)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl Default for LogPublisher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EventPublisher for LogPublisher {
    async fn publish(&self, event: &DomainEvent) -> Result<(), CatalogError> {
        let json = serde_json::to_string(event)?;
        info!("published {}", json);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::events::DomainEvent;
    use crate::gateway::events::EventPublisher;
    use crate::gateway::logs::publisher::LogPublisher;

    #[tokio::test]
    async fn test_should_publish_event() {
        let publisher = LogPublisher::new();
        let event = DomainEvent::added("books", "1", &"data").expect("build event");
        publisher.publish(&event).await.expect("should publish");
    }
}
