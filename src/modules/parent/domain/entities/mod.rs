pub mod child;
pub mod parent;

pub use child::Child;
pub use parent::Parent;
