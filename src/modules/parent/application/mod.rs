pub mod ports;
pub mod use_cases;

pub use ports::{
    CreateParentUseCase, DeleteParentUseCase, ParentRepository, ReadParentsUseCase,
    UpdateParentUseCase,
};
pub use use_cases::{
    CreateParentInteractor, DeleteParentInteractor, ReadParentsInteractor, UpdateParentInteractor,
};
