pub mod create_parent;
pub mod delete_parent;
pub mod read_parents;
pub mod update_parent;

pub use create_parent::CreateParentInteractor;
pub use delete_parent::DeleteParentInteractor;
pub use read_parents::ReadParentsInteractor;
pub use update_parent::UpdateParentInteractor;
