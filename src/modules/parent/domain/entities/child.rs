use serde::{Deserialize, Serialize};

use crate::shared::errors::AppResult;
use crate::shared::utils::Validator;

/// A named member of a parent's collection. Has no lifecycle of its own
/// outside the owning [`super::parent::Parent`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Child {
    /// `0` until storage assigns an identity.
    pub id: i32,
    pub name: String,
}

impl Child {
    pub fn new(name: impl Into<String>) -> AppResult<Self> {
        let name = name.into();
        Validator::validate_name("name", &name)?;
        Ok(Self { id: 0, name })
    }
}
