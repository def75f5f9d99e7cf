use super::config::DatabaseConfig;
use crate::{log_error, log_info};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::logger::LogContext;
use diesel::connection::SimpleConnection;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use std::time::Duration;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Per-connection SQLite settings. Foreign keys are off by default in SQLite,
/// and the child -> parent ownership depends on them.
#[derive(Debug, Clone, Copy)]
pub struct ConnectionOptions {
    pub busy_timeout_ms: u64,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            busy_timeout_ms: 5_000,
        }
    }
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA foreign_keys = ON; PRAGMA busy_timeout = {};",
            self.busy_timeout_ms
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

/// Connection recycling for the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolLifetimes {
    pub min_idle: Option<u32>,
    pub idle_timeout: Option<Duration>,
    pub max_lifetime: Option<Duration>,
}

impl PoolLifetimes {
    /// An in-memory database lives only as long as its one connection, so that
    /// connection is never reaped.
    pub fn for_config(config: &DatabaseConfig) -> Self {
        if config.is_in_memory() {
            Self {
                min_idle: Some(1),
                idle_timeout: None,
                max_lifetime: None,
            }
        } else {
            Self {
                min_idle: None,
                idle_timeout: Some(Duration::from_secs(300)), // Close idle connections after 5 minutes
                max_lifetime: Some(Duration::from_secs(1800)), // Replace connections after 30 minutes
            }
        }
    }
}

#[derive(Debug)]
pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn connect(config: &DatabaseConfig) -> AppResult<Self> {
        let manager = ConnectionManager::<SqliteConnection>::new(config.url.as_str());
        let lifetimes = PoolLifetimes::for_config(config);

        let pool = r2d2::Pool::builder()
            .max_size(config.max_connections)
            .min_idle(lifetimes.min_idle)
            .idle_timeout(lifetimes.idle_timeout)
            .max_lifetime(lifetimes.max_lifetime)
            .connection_timeout(config.connection_timeout)
            .connection_customizer(Box::new(ConnectionOptions::default()))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        log_info!(
            "Database connection pool initialized for '{}' with max_size: {}",
            config.url,
            pool.max_size()
        );

        Ok(Self { pool })
    }

    /// Apply every embedded migration that has not run yet
    pub fn run_migrations(&self) -> AppResult<usize> {
        let mut conn = self.get_connection()?;
        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|e| {
                log_error!("Failed to run migrations: {}", e);
                AppError::DatabaseError(format!("Failed to run migrations: {}", e))
            })?;

        if !applied.is_empty() {
            log_info!("Applied {} database migration(s)", applied.len());
        }
        Ok(applied.len())
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        let start = std::time::Instant::now();

        match self.pool.get() {
            Ok(conn) => {
                let duration = start.elapsed().as_millis() as u64;
                if duration > 100 {
                    LogContext::performance_metric("db_connection_acquire", duration, Some("slow"));
                }
                Ok(conn)
            }
            Err(e) => {
                LogContext::error_with_context(
                    &e,
                    "Failed to acquire database connection from pool",
                );
                Err(AppError::from(e))
            }
        }
    }

    /// Get pool statistics for monitoring
    pub fn pool_status(&self) -> PoolStatus {
        let state = self.pool.state();
        PoolStatus {
            connections: state.connections,
            idle_connections: state.idle_connections,
            max_size: self.pool.max_size(),
        }
    }
}

#[derive(Debug)]
pub struct PoolStatus {
    pub connections: u32,
    pub idle_connections: u32,
    pub max_size: u32,
}
