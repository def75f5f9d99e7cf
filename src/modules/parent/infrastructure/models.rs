use crate::schema::{children, parents};
use diesel::prelude::*;

// ============= PARENT MODELS =============

// For reading from database - with associations support
#[derive(Queryable, Selectable, Identifiable, Debug, Clone, PartialEq)]
#[diesel(table_name = parents)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ParentModel {
    pub id: i32,
    pub name: String,
}

// For inserting new parents (id assigned by storage)
#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = parents)]
pub struct NewParent<'a> {
    pub name: &'a str,
}

// ============= CHILD MODELS =============

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone, PartialEq)]
#[diesel(belongs_to(ParentModel, foreign_key = parent_id))]
#[diesel(table_name = children)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct ChildModel {
    pub id: i32,
    pub parent_id: i32,
    pub name: String,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = children)]
pub struct NewChild<'a> {
    pub parent_id: i32,
    pub name: &'a str,
}
