/// Isolated test database utility backed by a temporary SQLite file
/// Each test gets its own database file that is removed when the guard drops
///
/// A file (rather than ":memory:") lets every pooled connection see the same data.
use diesel::prelude::*;
use diesel::sql_types::{BigInt, Integer};
use household_lib::shared::infrastructure::{Database, DatabaseConfig};
use household_lib::HouseholdServices;
use std::sync::Arc;
use tempfile::TempDir;

#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = BigInt)]
    count: i64,
}

/// Isolated test database that automatically cleans up on drop
///
/// # Example
/// ```rust
/// #[tokio::test]
/// async fn test_something() {
///     let test_db = TestDb::new();
///     let repo = ParentRepositoryImpl::new(test_db.database());
///     // Test...
/// }
/// ```
pub struct TestDb {
    // Held for its Drop: deletes the directory and database file
    _dir: TempDir,
    database: Arc<Database>,
}

impl TestDb {
    /// Creates a fresh database file and applies every migration
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir for test database");
        let path = dir.path().join("household_test.db");

        let config = DatabaseConfig::new(path.to_string_lossy().into_owned())
            .with_max_connections(4)
            .expect("valid pool size");

        let database = Database::connect(&config).expect("Failed to open test database");
        database
            .run_migrations()
            .expect("Unable to migrate the test database");

        Self {
            _dir: dir,
            database: Arc::new(database),
        }
    }

    pub fn database(&self) -> Arc<Database> {
        Arc::clone(&self.database)
    }

    pub fn services(&self) -> HouseholdServices {
        HouseholdServices::from_database(self.database())
    }

    /// Child rows referencing `parent_id`, counted directly in storage
    pub fn count_children_of(&self, parent_id: i32) -> i64 {
        let mut conn = self.database.get_connection().expect("connection");
        diesel::sql_query("SELECT COUNT(*) AS count FROM children WHERE parent_id = ?")
            .bind::<Integer, _>(parent_id)
            .get_result::<CountResult>(&mut conn)
            .expect("count children")
            .count
    }

    pub fn count_rows(&self, table: &str) -> i64 {
        let mut conn = self.database.get_connection().expect("connection");
        diesel::sql_query(format!("SELECT COUNT(*) AS count FROM {}", table))
            .get_result::<CountResult>(&mut conn)
            .expect("count rows")
            .count
    }
}
