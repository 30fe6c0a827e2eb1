use std::sync::Arc;
use crate::books::store::CatalogStore;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::gateway::factory::create_publisher;

pub fn create_catalog_service(store: Arc<CatalogStore>) -> Box<dyn CatalogService> {
    let publisher = create_publisher();
    Box::new(CatalogServiceImpl::new(store, publisher))
}
