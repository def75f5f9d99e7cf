/// Conversions between diesel row models and domain entities
use crate::modules::parent::domain::{Child, Parent};
use crate::modules::parent::infrastructure::models::{ChildModel, ParentModel};

/// Rows must already be in insertion order (ascending id)
pub fn model_to_entity(model: ParentModel, children: Vec<ChildModel>) -> Parent {
    Parent {
        id: model.id,
        name: model.name,
        children: children.into_iter().map(child_model_to_entity).collect(),
    }
}

pub fn child_model_to_entity(model: ChildModel) -> Child {
    Child {
        id: model.id,
        name: model.name,
    }
}
