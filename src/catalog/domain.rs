pub mod service;

use async_trait::async_trait;
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;
use crate::core::catalog::CatalogResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    // None category means no filter; the branch is taken once per call
    async fn list_books(&self, category: Option<&str>) -> CatalogResult<Vec<Book>>;
    async fn find_book_by_id(&self, id: i64) -> CatalogResult<Book>;
    async fn add_book(&self, draft: &BookDraft) -> CatalogResult<Book>;
    // None means no book matched the id; the store stays untouched
    async fn update_book(&self, id: i64, draft: &BookDraft) -> CatalogResult<Option<Book>>;
    // false means no book matched the id
    async fn remove_book(&self, id: i64) -> CatalogResult<bool>;
}
