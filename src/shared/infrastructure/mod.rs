/// Shared infrastructure concerns
///
/// Storage configuration and the pooled SQLite database used by every
/// repository implementation.
pub mod config;
pub mod database;

// Re-exports for convenience
pub use config::DatabaseConfig;
pub use database::{Database, DbConnection, DbPool};
