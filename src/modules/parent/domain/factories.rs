use super::entities::{child::Child, parent::Parent};
use crate::shared::errors::AppResult;

/// Factory trait for building unsaved parents from raw input
#[cfg_attr(test, mockall::automock)]
pub trait ParentFactory: Send + Sync {
    /// Fails with `InvalidArgument` ("name") when `name` is empty
    fn create(&self, name: &str) -> AppResult<Parent>;
}

/// Factory trait for building unsaved children from raw input
#[cfg_attr(test, mockall::automock)]
pub trait ChildFactory: Send + Sync {
    fn create(&self, name: &str) -> AppResult<Child>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultParentFactory;

impl ParentFactory for DefaultParentFactory {
    fn create(&self, name: &str) -> AppResult<Parent> {
        Parent::new(name)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultChildFactory;

impl ChildFactory for DefaultChildFactory {
    fn create(&self, name: &str) -> AppResult<Child> {
        Child::new(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::errors::AppError;

    #[test]
    fn parent_factory_creates_named_parent() {
        let parent = DefaultParentFactory.create("Fred Bloggs").unwrap();
        assert_eq!(parent.name, "Fred Bloggs");
        assert_eq!(parent.id, 0);
        assert!(parent.children.is_empty());
    }

    #[test]
    fn child_factory_creates_named_child() {
        let child = DefaultChildFactory.create("Alice Bloggs").unwrap();
        assert_eq!(child.name, "Alice Bloggs");
        assert_eq!(child.id, 0);
    }

    #[test]
    fn factories_reject_empty_names() {
        for result in [
            DefaultParentFactory.create("").map(|_| ()),
            DefaultChildFactory.create("   ").map(|_| ()),
        ] {
            match result {
                Err(AppError::InvalidArgument { param, .. }) => assert_eq!(param, "name"),
                other => panic!("expected InvalidArgument, got {:?}", other),
            }
        }
    }
}
