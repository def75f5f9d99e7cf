use crate::shared::errors::{AppError, AppResult};
use std::env;
use std::time::Duration;

pub const DEFAULT_DATABASE_URL: &str = "household.db";
pub const IN_MEMORY_DATABASE_URL: &str = ":memory:";

const DEFAULT_CONNECTION_TIMEOUT_SECS: u64 = 10;
const MAX_POOL_SIZE: u32 = 8;

/// Storage settings, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub connection_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();
        let max_connections = if is_in_memory_url(&url) {
            1
        } else {
            Self::default_pool_size()
        };

        Self {
            url,
            max_connections,
            connection_timeout: Duration::from_secs(DEFAULT_CONNECTION_TIMEOUT_SECS),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(IN_MEMORY_DATABASE_URL)
    }

    /// Reads `DATABASE_URL`, `DATABASE_MAX_CONNECTIONS` and
    /// `DATABASE_CONNECTION_TIMEOUT_SECS`.
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let url = env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let mut config = Self::new(url);

        if let Some(max) = Self::read_number::<u32>("DATABASE_MAX_CONNECTIONS")? {
            config = config.with_max_connections(max)?;
        }
        if let Some(secs) = Self::read_number::<u64>("DATABASE_CONNECTION_TIMEOUT_SECS")? {
            config = config.with_connection_timeout(Duration::from_secs(secs));
        }

        Ok(config)
    }

    pub fn with_max_connections(mut self, max_connections: u32) -> AppResult<Self> {
        if max_connections == 0 {
            return Err(AppError::ConfigurationError(
                "DATABASE_MAX_CONNECTIONS must be at least 1".to_string(),
            ));
        }
        // Every connection to an in-memory database opens a distinct database.
        self.max_connections = if self.is_in_memory() {
            1
        } else {
            max_connections
        };
        Ok(self)
    }

    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    pub fn is_in_memory(&self) -> bool {
        is_in_memory_url(&self.url)
    }

    fn read_number<T: std::str::FromStr>(key: &str) -> AppResult<Option<T>> {
        match env::var(key) {
            Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|_| {
                AppError::ConfigurationError(format!("{} must be a number, got '{}'", key, raw))
            }),
            Err(_) => Ok(None),
        }
    }

    fn default_pool_size() -> u32 {
        let cpu_count = std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(4);

        // SQLite serialises writers, so a large pool buys nothing
        std::cmp::min(cpu_count as u32, MAX_POOL_SIZE)
    }
}

/// `:memory:` plus the URI forms `file::memory:` and `file:<name>?mode=memory`.
fn is_in_memory_url(url: &str) -> bool {
    if url == IN_MEMORY_DATABASE_URL {
        return true;
    }
    let Some(rest) = url.strip_prefix("file:") else {
        return false;
    };
    let (path, query) = rest.split_once('?').unwrap_or((rest, ""));
    path == IN_MEMORY_DATABASE_URL || query.split('&').any(|pair| pair == "mode=memory")
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}
