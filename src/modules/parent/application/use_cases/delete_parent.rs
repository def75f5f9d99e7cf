use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::parent::application::ports::{DeleteParentUseCase, ParentRepository};
use crate::shared::errors::AppResult;

pub struct DeleteParentInteractor {
    repository: Arc<dyn ParentRepository>,
}

impl DeleteParentInteractor {
    pub fn new(repository: Arc<dyn ParentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl DeleteParentUseCase for DeleteParentInteractor {
    async fn delete_parent(&self, id: i32) -> AppResult<()> {
        self.repository.delete_parent(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::parent::application::ports::MockParentRepository;
    use crate::shared::errors::AppError;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn delete_parent_delegates_id() {
        let mut repository = MockParentRepository::new();
        repository
            .expect_delete_parent()
            .with(eq(1))
            .times(1)
            .returning(|_| Ok(()));

        DeleteParentInteractor::new(Arc::new(repository))
            .delete_parent(1)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_missing_parent_propagates_not_found() {
        let mut repository = MockParentRepository::new();
        repository
            .expect_delete_parent()
            .returning(|id| Err(AppError::parent_not_found(id)));

        let err = DeleteParentInteractor::new(Arc::new(repository))
            .delete_parent(9)
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Parent does not exist (id 9)");
    }
}
