use crate::entity::Entity;
use crate::error::DataError;
use std::future::Future;

/// Generic async repository trait for CRUD operations on one entity type.
///
/// Uses RPITIT (return-position `impl Trait` in traits), no `async-trait` needed.
/// `Draft` is the write model (an entity without its id); `Filter` narrows
/// `find_all`.
pub trait Repository<T: Entity>: Send + Sync {
    type Draft: Send + Sync;
    type Filter: Send + Sync;

    fn find_by_id(&self, id: &T::Id) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    fn find_all(&self, filter: &Self::Filter) -> impl Future<Output = Result<Vec<T>, DataError>> + Send;
    fn insert(&self, draft: &Self::Draft) -> impl Future<Output = Result<T, DataError>> + Send;
    /// Returns `None` when no row has `id`.
    fn update(&self, id: &T::Id, draft: &Self::Draft) -> impl Future<Output = Result<Option<T>, DataError>> + Send;
    /// Returns `false` when no row has `id`.
    fn delete(&self, id: &T::Id) -> impl Future<Output = Result<bool, DataError>> + Send;
    fn exists(&self, id: &T::Id) -> impl Future<Output = Result<bool, DataError>> + Send;
}
