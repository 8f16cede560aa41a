use tracing::debug;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::model::LibraryItem;
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;

pub(crate) const NO_ITEMS: &str = "No items in the library.";

pub(crate) struct CatalogServiceImpl {
    items: Vec<LibraryItem>,
    repository: Box<dyn Repository<LibraryItem>>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(repository: Box<dyn Repository<LibraryItem>>) -> Self {
        Self {
            items: Vec::new(),
            repository,
        }
    }

    // linear scan, first id match wins
    fn position(&self, id: i64) -> LibraryResult<usize> {
        self.items.iter().position(|item| item.id == id)
            .ok_or_else(|| LibraryError::not_found("Item not found."))
    }
}

impl CatalogService for CatalogServiceImpl {
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<()> {
        debug!("adding item {} '{}'", item.id, item.title);
        self.items.push(item);
        self.repository.save_all(&self.items)?;
        Ok(())
    }

    fn display_items(&self) -> Vec<String> {
        if self.items.is_empty() {
            return vec![NO_ITEMS.to_string()];
        }
        self.items.iter().map(ToString::to_string).collect()
    }

    fn borrow_item(&mut self, id: i64) -> LibraryResult<()> {
        let pos = self.position(id)?;
        self.items[pos].borrow()?;
        debug!("borrowed item {}", id);
        self.repository.save_all(&self.items)?;
        Ok(())
    }

    fn return_item(&mut self, id: i64) -> LibraryResult<()> {
        let pos = self.position(id)?;
        self.items[pos].give_back()?;
        debug!("returned item {}", id);
        self.repository.save_all(&self.items)?;
        Ok(())
    }

    fn load_from_file(&mut self) -> LibraryResult<()> {
        if let Some(items) = self.repository.load_all()? {
            debug!("loaded {} items", items.len());
            self.items = items;
        }
        Ok(())
    }
}
