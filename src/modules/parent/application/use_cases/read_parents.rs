use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::parent::application::ports::{ParentRepository, ReadParentsUseCase};
use crate::modules::parent::domain::Parent;
use crate::shared::errors::AppResult;

/// Pass-through queries over the repository
pub struct ReadParentsInteractor {
    repository: Arc<dyn ParentRepository>,
}

impl ReadParentsInteractor {
    pub fn new(repository: Arc<dyn ParentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ReadParentsUseCase for ReadParentsInteractor {
    async fn list_parents(&self) -> AppResult<Vec<Parent>> {
        self.repository.list_parents().await
    }

    async fn list_parents_with_children(&self) -> AppResult<Vec<Parent>> {
        self.repository.list_parents_with_children().await
    }

    async fn find_parent(&self, id: i32) -> AppResult<Option<Parent>> {
        self.repository.find_parent(id).await
    }
}
