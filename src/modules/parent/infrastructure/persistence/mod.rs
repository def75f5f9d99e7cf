pub mod mapper;
pub mod parent_repository_impl;

pub use parent_repository_impl::ParentRepositoryImpl;
