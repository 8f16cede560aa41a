pub mod model;
pub mod service;

use crate::catalog::domain::model::LibraryItem;
use crate::core::library::LibraryResult;

pub trait CatalogService: Sync + Send {
    // appends the item and persists the whole collection; duplicate ids
    // are not rejected
    fn add_item(&mut self, item: LibraryItem) -> LibraryResult<()>;

    // one display line per item in insertion order, or a single
    // "no items" line for an empty catalog
    fn display_items(&self) -> Vec<String>;

    fn borrow_item(&mut self, id: i64) -> LibraryResult<()>;

    fn return_item(&mut self, id: i64) -> LibraryResult<()>;

    // replaces the in-memory collection from the backing file; a missing
    // file leaves the collection untouched
    fn load_from_file(&mut self) -> LibraryResult<()>;
}
