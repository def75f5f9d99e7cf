pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{
    CreateParentInteractor, CreateParentUseCase, DeleteParentInteractor, DeleteParentUseCase,
    ParentRepository, ReadParentsInteractor, ReadParentsUseCase, UpdateParentInteractor,
    UpdateParentUseCase,
};
pub use domain::{Child, ChildFactory, DefaultChildFactory, DefaultParentFactory, Parent, ParentFactory};
pub use infrastructure::ParentRepositoryImpl;
