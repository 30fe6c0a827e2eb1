use std::sync::Arc;
use crate::books::store::CatalogStore;

pub fn create_book_store(seeded: bool) -> Arc<CatalogStore> {
    if seeded {
        Arc::new(CatalogStore::seeded())
    } else {
        Arc::new(CatalogStore::new())
    }
}
