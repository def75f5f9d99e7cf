// Shared Kernel
// Cross-cutting errors, storage plumbing and logging used by every module

pub mod errors; // Shared error types
pub mod infrastructure; // Shared infrastructure (database, configuration)
pub mod utils; // Shared utilities (logging, validation)

// Re-exports for convenience
pub use errors::{AppError, AppResult, EntityKind};
pub use infrastructure::{Database, DatabaseConfig};
