use lazy_static::lazy_static;
use tokio::sync::RwLock;
use crate::books::domain::model::Book;
use crate::books::dto::BookDraft;

lazy_static! {
    // the fixed catalog every fresh process starts with
    static ref SEED_BOOKS: Vec<Book> = vec![
        Book::new(1, "Computer Science Pro", "Chad Darby", "Computer Science", 5),
        Book::new(2, "Java Spring Master", "Eric Roby", "Computer Science", 5),
        Book::new(3, "Why 1+1 Rocks", "Adil A.", "Math", 5),
        Book::new(4, "How Bears Hibernate", "Bob B.", "Science", 2),
        Book::new(5, "A Pirate's Treasure", "Curt C.", "History", 3),
        Book::new(6, "Why 2+2 is Better", "Dan D.", "Math", 1),
    ];
}

// CatalogStore owns the insertion-ordered sequence of books and is the sole
// authority for id assignment and mutation. Callers always receive clones,
// never a handle into the sequence. A single lock guards the whole sequence
// so id computation and append cannot interleave with another writer.
#[derive(Debug)]
pub struct CatalogStore {
    books: RwLock<Vec<Book>>,
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            books: RwLock::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self {
            books: RwLock::new(SEED_BOOKS.clone()),
        }
    }

    pub async fn find_all(&self) -> Vec<Book> {
        self.books.read().await.clone()
    }

    pub async fn find_by_category(&self, category: &str) -> Vec<Book> {
        self.books.read().await.iter()
            .filter(|book| book.matches_category(category))
            .cloned()
            .collect()
    }

    pub async fn get(&self, id: i64) -> Option<Book> {
        self.books.read().await.iter()
            .find(|book| book.id == id)
            .cloned()
    }

    // Next id is the last book's id plus one, or 1 for an empty catalog.
    // Deleting the highest-id book and creating again reuses that id; this
    // quirk is part of the contract.
    pub async fn create(&self, draft: &BookDraft) -> Book {
        let mut books = self.books.write().await;
        let id = books.last().map_or(1, |book| book.id + 1);
        let book = draft.build_book(id);
        books.push(book.clone());
        book
    }

    // Replaces the matching book in place, keeping its id and position.
    // Returns None and leaves the sequence untouched when the id is absent.
    pub async fn update(&self, id: i64, draft: &BookDraft) -> Option<Book> {
        let mut books = self.books.write().await;
        for stored in books.iter_mut() {
            if stored.id == id {
                *stored = draft.build_book(id);
                return Some(stored.clone());
            }
        }
        None
    }

    // Removes every book with the given id and reports whether any was removed.
    pub async fn delete(&self, id: i64) -> bool {
        let mut books = self.books.write().await;
        let before = books.len();
        books.retain(|book| book.id != id);
        books.len() < before
    }
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}
