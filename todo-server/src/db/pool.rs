//! Database connection pool management
//!
//! Handlers acquire a connection per statement and give it back before the
//! response goes out. The pool is the only state shared between requests.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DbConfig;

/// Create a PostgreSQL connection pool.
///
/// The pool connects lazily: an unreachable database shows up as a failed
/// request (500) once `acquire_timeout` runs out, not as a startup crash.
/// Callers that must know the database is up run
/// [`wait_for_ready`](super::wait_for_ready) first.
///
/// # Example
///
/// ```ignore
/// let pool = create_pool(&DbConfig::from_env()?);
/// ```
pub fn create_pool(config: &DbConfig) -> PgPool {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_lazy_with(config.connect_options())
}
