use async_trait::async_trait;

use crate::modules::parent::domain::{Child, Parent};
use crate::shared::errors::AppResult;

/// Port (interface) for the parent aggregate's durable storage.
///
/// Every mutating operation loads the whole aggregate, checks existence and
/// writes inside one transaction; a failed call leaves storage untouched.
/// Not-found conditions surface as `AppError::NotFound` naming the entity.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ParentRepository: Send + Sync {
    /// Insert a new parent together with any attached children.
    /// Returns the aggregate with storage-assigned ids.
    async fn save(&self, parent: Parent) -> AppResult<Parent>;

    /// All parents, children not loaded
    async fn list_parents(&self) -> AppResult<Vec<Parent>>;

    /// All parents with their children in insertion order
    async fn list_parents_with_children(&self) -> AppResult<Vec<Parent>>;

    /// Full aggregate by id
    async fn find_parent(&self, id: i32) -> AppResult<Option<Parent>>;

    async fn add_child_to_parent(&self, parent_id: i32, child: Child) -> AppResult<Parent>;

    async fn remove_child_from_parent(&self, parent_id: i32, child_id: i32) -> AppResult<Parent>;

    /// Deletes the parent and every child it owns
    async fn delete_parent(&self, id: i32) -> AppResult<()>;
}
