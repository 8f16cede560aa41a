use crate::catalog::domain::CatalogService;
use crate::catalog::domain::service::CatalogServiceImpl;
use crate::catalog::repository::file_item_repository::FileItemRepository;
use crate::core::domain::Configuration;

pub fn create_catalog_service(config: &Configuration) -> Box<dyn CatalogService> {
    let repository = Box::new(FileItemRepository::new(&config.data_file));
    Box::new(CatalogServiceImpl::new(repository))
}
