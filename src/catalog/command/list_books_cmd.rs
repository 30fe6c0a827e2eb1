use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::domain::model::Book;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListBooksCommandRequest {
    pub category: Option<String>,
}

impl ListBooksCommandRequest {
    pub fn new(category: Option<&str>) -> Self {
        Self {
            category: category.map(str::to_string),
        }
    }

    // an empty category from the query string means no filter
    pub fn normalized_category(&self) -> Option<&str> {
        self.category.as_deref().filter(|category| !category.is_empty())
    }
}

#[derive(Debug, Serialize)]
pub struct ListBooksCommandResponse {
    pub books: Vec<Book>,
}

impl ListBooksCommandResponse {
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books,
        }
    }
}

#[async_trait]
impl Command<ListBooksCommandRequest, ListBooksCommandResponse> for ListBooksCommand {
    async fn execute(&self, req: ListBooksCommandRequest) -> Result<ListBooksCommandResponse, CommandError> {
        self.catalog_service.list_books(req.normalized_category())
            .await.map_err(CommandError::from).map(ListBooksCommandResponse::new)
    }
}

#[cfg(test)]
mod tests {
    use crate::books::factory::create_book_store;
    use crate::catalog::command::list_books_cmd::{ListBooksCommand, ListBooksCommandRequest};
    use crate::catalog::factory;
    use crate::core::command::Command;

    fn list_cmd() -> ListBooksCommand {
        ListBooksCommand::new(factory::create_catalog_service(create_book_store(true)))
    }

    #[tokio::test]
    async fn test_should_run_list_books() {
        let cmd = list_cmd();
        let res = cmd.execute(ListBooksCommandRequest::new(None)).await.expect("should list books");
        assert_eq!(6, res.books.len());
    }

    #[tokio::test]
    async fn test_should_run_list_books_with_category() {
        let cmd = list_cmd();
        let res = cmd.execute(ListBooksCommandRequest::new(Some("Science")))
            .await.expect("should list books");
        assert_eq!(1, res.books.len());
        assert_eq!("How Bears Hibernate", res.books[0].title.as_str());
    }

    #[tokio::test]
    async fn test_should_treat_empty_category_as_no_filter() {
        let cmd = list_cmd();
        let res = cmd.execute(ListBooksCommandRequest::new(Some("")))
            .await.expect("should list books");
        assert_eq!(6, res.books.len());
    }
}
