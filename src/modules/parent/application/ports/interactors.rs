//! Inbound ports: what a transport layer (CLI, HTTP, test harness) calls.

use async_trait::async_trait;

use crate::modules::parent::domain::Parent;
use crate::shared::errors::AppResult;

#[async_trait]
pub trait CreateParentUseCase: Send + Sync {
    async fn create_parent(&self, name: &str) -> AppResult<Parent>;

    /// Children are attached in the order of `child_names` and saved with the parent.
    async fn create_parent_with_children(
        &self,
        name: &str,
        child_names: &[String],
    ) -> AppResult<Parent>;
}

#[async_trait]
pub trait ReadParentsUseCase: Send + Sync {
    async fn list_parents(&self) -> AppResult<Vec<Parent>>;

    async fn list_parents_with_children(&self) -> AppResult<Vec<Parent>>;

    async fn find_parent(&self, id: i32) -> AppResult<Option<Parent>>;
}

#[async_trait]
pub trait UpdateParentUseCase: Send + Sync {
    async fn add_child_by_name(&self, parent_id: i32, child_name: &str) -> AppResult<Parent>;

    async fn remove_child_by_id(&self, parent_id: i32, child_id: i32) -> AppResult<Parent>;
}

#[async_trait]
pub trait DeleteParentUseCase: Send + Sync {
    async fn delete_parent(&self, id: i32) -> AppResult<()>;
}
