use crate::core::library::LibraryResult;

// Persistence seam for the catalog. The backing store holds the whole
// collection and is replaced on every save rather than appended to.
pub trait Repository<Entity>: Sync + Send {
    // overwrites the backing store with the given entities, in order
    fn save_all(&self, entities: &[Entity]) -> LibraryResult<usize>;

    // reads back all entities in stored order; None when the backing
    // store does not exist yet
    fn load_all(&self) -> LibraryResult<Option<Vec<Entity>>>;
}
