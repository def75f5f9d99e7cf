use async_trait::async_trait;
use std::sync::Arc;

use crate::log_debug;
use crate::modules::parent::application::ports::{CreateParentUseCase, ParentRepository};
use crate::modules::parent::domain::{ChildFactory, Parent, ParentFactory};
use crate::shared::errors::AppResult;

/// Builds a parent (optionally with children) and saves the aggregate once
pub struct CreateParentInteractor {
    parent_factory: Arc<dyn ParentFactory>,
    child_factory: Arc<dyn ChildFactory>,
    repository: Arc<dyn ParentRepository>,
}

impl CreateParentInteractor {
    pub fn new(
        parent_factory: Arc<dyn ParentFactory>,
        child_factory: Arc<dyn ChildFactory>,
        repository: Arc<dyn ParentRepository>,
    ) -> Self {
        Self {
            parent_factory,
            child_factory,
            repository,
        }
    }
}

#[async_trait]
impl CreateParentUseCase for CreateParentInteractor {
    async fn create_parent(&self, name: &str) -> AppResult<Parent> {
        let parent = self.parent_factory.create(name)?;
        self.repository.save(parent).await
    }

    async fn create_parent_with_children(
        &self,
        name: &str,
        child_names: &[String],
    ) -> AppResult<Parent> {
        let mut parent = self.parent_factory.create(name)?;
        for child_name in child_names {
            let child = self.child_factory.create(child_name)?;
            parent.add_child(child);
        }

        log_debug!(
            "Creating parent '{}' with {} child(ren)",
            parent.name,
            parent.child_count()
        );
        self.repository.save(parent).await
    }
}
