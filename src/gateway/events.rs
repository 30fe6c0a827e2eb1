use async_trait::async_trait;
use crate::core::catalog::CatalogError;
use crate::core::events::DomainEvent;

#[async_trait]
pub trait EventPublisher: Sync + Send {
    async fn publish(&self, event: &DomainEvent) -> Result<(), CatalogError>;
}
