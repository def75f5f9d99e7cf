pub mod entities;
pub mod factories;

// Re-exports for easy access
pub use entities::{Child, Parent};
pub use factories::{ChildFactory, DefaultChildFactory, DefaultParentFactory, ParentFactory};
