use serde::{Deserialize, Serialize};

use super::child::Child;
use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// Aggregate root. Owns its children exclusively; they are kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parent {
    /// `0` until storage assigns an identity; never changes afterwards.
    pub id: i32,
    pub name: String,
    pub children: Vec<Child>,
}

impl Parent {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_name("name", &name)?;
        Ok(Self {
            id: 0,
            name,
            children: Vec::new(),
        })
    }

    pub fn add_child(&mut self, child: Child) {
        self.children.push(child);
    }

    pub fn child(&self, child_id: i32) -> Option<&Child> {
        self.children.iter().find(|c| c.id == child_id)
    }

    pub fn contains_child(&self, child_id: i32) -> bool {
        self.child(child_id).is_some()
    }

    /// Removes the child with `child_id`, keeping the order of the rest.
    pub fn remove_child(&mut self, child_id: i32) -> Option<Child> {
        let index = self.children.iter().position(|c| c.id == child_id)?;
        Some(self.children.remove(index))
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn child_ids(&self) -> Vec<i32> {
        self.children.iter().map(|c| c.id).collect()
    }
}
