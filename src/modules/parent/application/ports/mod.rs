pub mod interactors;
pub mod parent_repository;

pub use interactors::{
    CreateParentUseCase, DeleteParentUseCase, ReadParentsUseCase, UpdateParentUseCase,
};
pub use parent_repository::ParentRepository;

#[cfg(test)]
pub use parent_repository::MockParentRepository;
