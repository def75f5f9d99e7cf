/// Test data builders with sensible defaults
use household_lib::modules::parent::domain::{Child, Parent};

pub const FRED: &str = "Fred Bloggs";
pub const ALICE: &str = "Alice Bloggs";

/// Unsaved "Fred Bloggs" with the given children attached
pub fn parent_with_children(names: &[&str]) -> Parent {
    let mut parent = Parent::new(FRED).expect("valid parent name");
    for name in names {
        parent.add_child(Child::new(*name).expect("valid child name"));
    }
    parent
}

pub fn fred_with_alice() -> Parent {
    parent_with_children(&[ALICE])
}
