use std::sync::Arc;
use async_trait::async_trait;
use tracing::log::warn;
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;
use crate::books::store::CatalogStore;
use crate::catalog::domain::CatalogService;
use crate::core::catalog::{CatalogError, CatalogResult};
use crate::core::events::DomainEvent;
use crate::gateway::events::EventPublisher;

pub struct CatalogServiceImpl {
    store: Arc<CatalogStore>,
    events_publisher: Box<dyn EventPublisher>,
}

impl CatalogServiceImpl {
    pub fn new(store: Arc<CatalogStore>, events_publisher: Box<dyn EventPublisher>) -> Self {
        Self {
            store,
            events_publisher,
        }
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn list_books(&self, category: Option<&str>) -> CatalogResult<Vec<Book>> {
        match category {
            None => Ok(self.store.find_all().await),
            Some(category) => Ok(self.store.find_by_category(category).await),
        }
    }

    async fn find_book_by_id(&self, id: i64) -> CatalogResult<Book> {
        self.store.get(id).await.ok_or_else(|| {
            CatalogError::not_found(format!("book {} not found", id).as_str())
        })
    }

    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<Book> {
        let book = self.store.create(draft).await;
        self.events_publisher.publish(&DomainEvent::added(
            "books", book.id.to_string().as_str(), &book)?).await?;
        Ok(book)
    }

    async fn update_book(&self, id: i64, draft: &BookDraft) -> CatalogResult<Option<Book>> {
        match self.store.update(id, draft).await {
            Some(book) => {
                self.events_publisher.publish(&DomainEvent::updated(
                    "books", id.to_string().as_str(), &book)?).await?;
                Ok(Some(book))
            }
            None => {
                warn!("update skipped, book {} not found", id);
                Ok(None)
            }
        }
    }

    async fn remove_book(&self, id: i64) -> CatalogResult<bool> {
        if self.store.delete(id).await {
            let data = id.to_string();
            self.events_publisher.publish(&DomainEvent::deleted(
                "books", data.as_str(), &data)?).await?;
            Ok(true)
        } else {
            warn!("delete skipped, book {} not found", id);
            Ok(false)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDraft;
    use crate::books::factory::create_book_store;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;

    fn seeded_service() -> Box<dyn CatalogService> {
        factory::create_catalog_service(create_book_store(true))
    }

    #[tokio::test]
    async fn test_should_list_all_books() {
        let catalog_svc = seeded_service();
        let books = catalog_svc.list_books(None).await.expect("should list books");
        assert_eq!(6, books.len());
    }

    #[tokio::test]
    async fn test_should_list_books_by_category() {
        let catalog_svc = seeded_service();
        let books = catalog_svc.list_books(Some("math")).await.expect("should list books");
        assert_eq!(2, books.len());
        assert_eq!("Why 1+1 Rocks", books[0].title.as_str());
        assert_eq!("Why 2+2 is Better", books[1].title.as_str());
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = seeded_service();
        let book = catalog_svc.add_book(&BookDraft::new("Test", "A", "Test", 3))
            .await.expect("should add book");
        assert_eq!(7, book.id);

        let loaded = catalog_svc.find_book_by_id(book.id).await.expect("should return book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = seeded_service();
        let updated = catalog_svc.update_book(3, &BookDraft::new("new title", "new author", "Math", 4))
            .await.expect("should update book").expect("book should exist");
        assert_eq!(3, updated.id);
        assert_eq!("new title", updated.title.as_str());

        let loaded = catalog_svc.find_book_by_id(3).await.expect("should return book");
        assert_eq!(updated, loaded);
    }

    #[tokio::test]
    async fn test_should_skip_update_for_unknown_id() {
        let catalog_svc = seeded_service();
        let res = catalog_svc.update_book(99, &BookDraft::new("ghost", "nobody", "Math", 1))
            .await.expect("should not fail");
        assert!(res.is_none());
        assert_eq!(6, catalog_svc.list_books(None).await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = seeded_service();
        assert!(catalog_svc.remove_book(5).await.expect("should remove book"));

        let loaded = catalog_svc.find_book_by_id(5).await;
        assert!(loaded.is_err());
    }

    #[tokio::test]
    async fn test_should_skip_remove_for_unknown_id() {
        let catalog_svc = seeded_service();
        assert!(!catalog_svc.remove_book(99).await.expect("should not fail"));
        assert_eq!(6, catalog_svc.list_books(None).await.expect("should list books").len());
    }
}
