use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;
use tokio::task;

use super::mapper;
use crate::modules::parent::application::ports::ParentRepository;
use crate::modules::parent::domain::{Child, Parent};
use crate::modules::parent::infrastructure::models::{ChildModel, NewChild, NewParent, ParentModel};
use crate::schema::{children, parents};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::Database;
use crate::shared::utils::{TimedOperation, Validator};
use crate::{log_debug, log_info, log_warn};

/// Diesel/SQLite implementation of the parent aggregate port.
///
/// Each call checks a connection out of the pool on a blocking thread and
/// hands it back when the call ends. Read-then-write operations run inside a
/// single `BEGIN IMMEDIATE` transaction, so the existence check and the write
/// observe the same aggregate and roll back together.
pub struct ParentRepositoryImpl {
    db: Arc<Database>,
}

impl ParentRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ParentRepository for ParentRepositoryImpl {
    // -------------------------------------------------------------------------
    // Public API (listed first for readability)
    // -------------------------------------------------------------------------

    async fn save(&self, parent: Parent) -> AppResult<Parent> {
        Validator::validate_unsaved("parent", parent.id)?;
        for child in &parent.children {
            Validator::validate_unsaved("child", child.id)?;
        }

        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("save", "parents");

        let saved = task::spawn_blocking(move || -> AppResult<Parent> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;

            conn.immediate_transaction::<_, AppError, _>(|conn| {
                let model = diesel::insert_into(parents::table)
                    .values(&NewParent { name: &parent.name })
                    .get_result::<ParentModel>(conn)?;

                let child_rows = Self::insert_children(conn, model.id, &parent.children)?;
                Ok(mapper::model_to_entity(model, child_rows))
            })
        })
        .await??;

        timer.finish();
        log_info!(
            "Saved parent {} ('{}') with {} child(ren)",
            saved.id,
            saved.name,
            saved.child_count()
        );
        Ok(saved)
    }

    async fn list_parents(&self) -> AppResult<Vec<Parent>> {
        let db = Arc::clone(&self.db);

        let models = task::spawn_blocking(move || -> AppResult<Vec<ParentModel>> {
            let mut conn = db.get_connection()?;
            let rows = parents::table
                .order(parents::id.asc())
                .load::<ParentModel>(&mut conn)?;
            Ok(rows)
        })
        .await??;

        log_debug!("Loaded {} parent(s) without children", models.len());
        Ok(models
            .into_iter()
            .map(|m| mapper::model_to_entity(m, Vec::new()))
            .collect())
    }

    async fn list_parents_with_children(&self) -> AppResult<Vec<Parent>> {
        let db = Arc::clone(&self.db);

        let loaded = task::spawn_blocking(move || -> AppResult<Vec<Parent>> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;

            // Both reads see the same snapshot
            conn.transaction::<_, AppError, _>(|conn| {
                let parent_models = parents::table
                    .order(parents::id.asc())
                    .load::<ParentModel>(conn)?;

                let child_rows = ChildModel::belonging_to(&parent_models)
                    .order(children::id.asc())
                    .load::<ChildModel>(conn)?;

                let grouped = child_rows.grouped_by(&parent_models);

                Ok(parent_models
                    .into_iter()
                    .zip(grouped)
                    .map(|(model, rows)| mapper::model_to_entity(model, rows))
                    .collect())
            })
        })
        .await??;

        log_debug!("Loaded {} parent(s) with children", loaded.len());
        Ok(loaded)
    }

    async fn find_parent(&self, id: i32) -> AppResult<Option<Parent>> {
        let db = Arc::clone(&self.db);

        task::spawn_blocking(move || -> AppResult<Option<Parent>> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;
            conn.transaction::<_, AppError, _>(|conn| Self::load_aggregate(conn, id))
        })
        .await?
    }

    async fn add_child_to_parent(&self, parent_id: i32, child: Child) -> AppResult<Parent> {
        Validator::validate_unsaved("child", child.id)?;

        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("add_child", "children");

        let updated = task::spawn_blocking(move || -> AppResult<Parent> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;

            conn.immediate_transaction::<_, AppError, _>(|conn| {
                let mut parent = Self::require_aggregate(conn, parent_id)?;

                let row = diesel::insert_into(children::table)
                    .values(&NewChild {
                        parent_id,
                        name: &child.name,
                    })
                    .get_result::<ChildModel>(conn)?;

                parent.add_child(mapper::child_model_to_entity(row));
                Ok(parent)
            })
        })
        .await??;

        timer.finish();
        log_info!(
            "Added child to parent {}; it now has {} child(ren)",
            parent_id,
            updated.child_count()
        );
        Ok(updated)
    }

    async fn remove_child_from_parent(&self, parent_id: i32, child_id: i32) -> AppResult<Parent> {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("remove_child", "children");

        let updated = task::spawn_blocking(move || -> AppResult<Parent> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;

            conn.immediate_transaction::<_, AppError, _>(|conn| {
                let mut parent = Self::require_aggregate(conn, parent_id)?;

                // Only children owned by this parent are eligible
                if !parent.contains_child(child_id) {
                    log_warn!("Child {} does not belong to parent {}", child_id, parent_id);
                    return Err(AppError::child_not_found(child_id));
                }

                diesel::delete(
                    children::table
                        .filter(children::id.eq(child_id))
                        .filter(children::parent_id.eq(parent_id)),
                )
                .execute(conn)?;

                parent.remove_child(child_id);
                Ok(parent)
            })
        })
        .await??;

        timer.finish();
        log_info!("Removed child {} from parent {}", child_id, parent_id);
        Ok(updated)
    }

    async fn delete_parent(&self, id: i32) -> AppResult<()> {
        let db = Arc::clone(&self.db);
        let timer = TimedOperation::new("delete", "parents");

        let removed_children = task::spawn_blocking(move || -> AppResult<usize> {
            let mut pooled = db.get_connection()?;
            let conn: &mut SqliteConnection = &mut pooled;

            conn.immediate_transaction::<_, AppError, _>(|conn| {
                Self::require_aggregate(conn, id)?;

                // The schema cascades as well; deleting explicitly keeps the
                // outcome identical when foreign keys are not enforced.
                let removed = diesel::delete(children::table.filter(children::parent_id.eq(id)))
                    .execute(conn)?;
                diesel::delete(parents::table.find(id)).execute(conn)?;
                Ok(removed)
            })
        })
        .await??;

        timer.finish();
        log_info!(
            "Deleted parent {} and {} child(ren)",
            id,
            removed_children
        );
        Ok(())
    }
}

// -----------------------------------------------------------------------------
// Private helpers (kept after public API for readability)
// -----------------------------------------------------------------------------

impl ParentRepositoryImpl {
    /// Load one parent and its children, ordered by insertion.
    fn load_aggregate(conn: &mut SqliteConnection, id: i32) -> AppResult<Option<Parent>> {
        let Some(model) = parents::table
            .find(id)
            .first::<ParentModel>(conn)
            .optional()?
        else {
            return Ok(None);
        };

        let child_rows = ChildModel::belonging_to(&model)
            .order(children::id.asc())
            .load::<ChildModel>(conn)?;

        Ok(Some(mapper::model_to_entity(model, child_rows)))
    }

    fn require_aggregate(conn: &mut SqliteConnection, id: i32) -> AppResult<Parent> {
        match Self::load_aggregate(conn, id)? {
            Some(parent) => Ok(parent),
            None => {
                log_warn!("Parent {} does not exist", id);
                Err(AppError::parent_not_found(id))
            }
        }
    }

    fn insert_children(
        conn: &mut SqliteConnection,
        parent_id: i32,
        pending: &[Child],
    ) -> AppResult<Vec<ChildModel>> {
        // One row at a time so ids follow input order
        pending
            .iter()
            .map(|child| {
                diesel::insert_into(children::table)
                    .values(&NewChild {
                        parent_id,
                        name: &child.name,
                    })
                    .get_result::<ChildModel>(conn)
                    .map_err(AppError::from)
            })
            .collect()
    }
}
