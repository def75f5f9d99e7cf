use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::parent::application::ports::{ParentRepository, UpdateParentUseCase};
use crate::modules::parent::domain::{ChildFactory, Parent};
use crate::shared::errors::AppResult;

/// Adds and removes children of an existing parent
pub struct UpdateParentInteractor {
    child_factory: Arc<dyn ChildFactory>,
    repository: Arc<dyn ParentRepository>,
}

impl UpdateParentInteractor {
    pub fn new(child_factory: Arc<dyn ChildFactory>, repository: Arc<dyn ParentRepository>) -> Self {
        Self {
            child_factory,
            repository,
        }
    }
}

#[async_trait]
impl UpdateParentUseCase for UpdateParentInteractor {
    async fn add_child_by_name(&self, parent_id: i32, child_name: &str) -> AppResult<Parent> {
        let child = self.child_factory.create(child_name)?;
        self.repository.add_child_to_parent(parent_id, child).await
    }

    async fn remove_child_by_id(&self, parent_id: i32, child_id: i32) -> AppResult<Parent> {
        self.repository
            .remove_child_from_parent(parent_id, child_id)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::parent::application::ports::MockParentRepository;
    use crate::modules::parent::domain::factories::MockChildFactory;
    use crate::modules::parent::domain::Child;
    use crate::shared::errors::{AppError, EntityKind};
    use mockall::predicate::eq;

    fn fred(children: &[(i32, &str)]) -> Parent {
        Parent {
            id: 1,
            name: "Fred Bloggs".to_string(),
            children: children
                .iter()
                .map(|(id, name)| Child {
                    id: *id,
                    name: name.to_string(),
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn add_child_by_name_builds_child_and_delegates() {
        let mut child_factory = MockChildFactory::new();
        child_factory
            .expect_create()
            .withf(|n| n == "Alice Bloggs")
            .times(1)
            .returning(|n| Child::new(n));

        let mut repository = MockParentRepository::new();
        repository
            .expect_add_child_to_parent()
            .withf(|id, child| *id == 1 && child.name == "Alice Bloggs" && child.id == 0)
            .times(1)
            .returning(|_, _| Ok(fred(&[(1, "Alice Bloggs")])));

        let updated = UpdateParentInteractor::new(Arc::new(child_factory), Arc::new(repository))
            .add_child_by_name(1, "Alice Bloggs")
            .await
            .unwrap();

        assert_eq!(updated.child_count(), 1);
    }

    #[tokio::test]
    async fn add_child_with_empty_name_fails_before_storage() {
        let mut child_factory = MockChildFactory::new();
        child_factory
            .expect_create()
            .returning(|n| Child::new(n));

        let mut repository = MockParentRepository::new();
        repository.expect_add_child_to_parent().never();

        let err = UpdateParentInteractor::new(Arc::new(child_factory), Arc::new(repository))
            .add_child_by_name(1, "")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument { .. }));
    }

    #[tokio::test]
    async fn add_child_to_missing_parent_propagates_not_found() {
        let mut child_factory = MockChildFactory::new();
        child_factory
            .expect_create()
            .returning(|n| Child::new(n));

        let mut repository = MockParentRepository::new();
        repository
            .expect_add_child_to_parent()
            .returning(|id, _| Err(AppError::parent_not_found(id)));

        let err = UpdateParentInteractor::new(Arc::new(child_factory), Arc::new(repository))
            .add_child_by_name(5, "Bob")
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound {
                entity: EntityKind::Parent,
                id: 5
            }
        ));
    }

    #[tokio::test]
    async fn remove_child_by_id_delegates_ids() {
        let mut repository = MockParentRepository::new();
        repository
            .expect_remove_child_from_parent()
            .with(eq(1), eq(2))
            .times(1)
            .returning(|_, _| Ok(fred(&[(1, "Alice Bloggs")])));

        let updated =
            UpdateParentInteractor::new(Arc::new(MockChildFactory::new()), Arc::new(repository))
                .remove_child_by_id(1, 2)
                .await
                .unwrap();

        assert_eq!(updated.child_ids(), vec![1]);
    }

    #[tokio::test]
    async fn remove_missing_child_propagates_not_found() {
        let mut repository = MockParentRepository::new();
        repository
            .expect_remove_child_from_parent()
            .returning(|_, child_id| Err(AppError::child_not_found(child_id)));

        let err =
            UpdateParentInteractor::new(Arc::new(MockChildFactory::new()), Arc::new(repository))
                .remove_child_by_id(1, 5)
                .await
                .unwrap_err();

        assert!(matches!(
            err,
            AppError::NotFound {
                entity: EntityKind::Child,
                id: 5
            }
        ));
    }
}
