//! Schema bootstrap: wait for PostgreSQL, then create the `todos` table

use std::time::Duration;

use sqlx::postgres::PgConnection;
use sqlx::{Connection, PgExecutor};

use crate::config::DbConfig;

/// Attempts before giving up on the database.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 30;

/// Pause between attempts.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_secs(2);

const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        description TEXT,
        completed BOOLEAN DEFAULT FALSE,
        created_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP,
        updated_at TIMESTAMPTZ DEFAULT CURRENT_TIMESTAMP
    )
"#;

/// Startup error
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    #[error("database unreachable after {attempts} attempts: {source}")]
    Unreachable {
        attempts: u32,
        #[source]
        source: sqlx::Error,
    },

    #[error("schema creation failed: {0}")]
    Create(#[source] sqlx::Error),
}

/// Fixed-interval retry policy for [`wait_for_ready`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub interval: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

/// Block until a connection to the database succeeds.
///
/// Each attempt opens one connection and closes it straight away. Sleeps
/// `policy.interval` between attempts, never after the last one. A policy
/// with `max_attempts == 0` still makes one attempt.
pub async fn wait_for_ready(config: &DbConfig, policy: &RetryPolicy) -> Result<(), SchemaError> {
    let options = config.connect_options();
    let max_attempts = policy.max_attempts.max(1);
    let mut attempt = 1;

    loop {
        match PgConnection::connect_with(&options).await {
            Ok(conn) => {
                if let Err(e) = conn.close().await {
                    tracing::debug!("closing readiness connection failed: {}", e);
                }
                tracing::info!(host = %config.host, port = config.port, "Database connection successful");
                return Ok(());
            }
            Err(e) if attempt < max_attempts => {
                tracing::info!(error = %e, "Waiting for database... ({}/{})", attempt, max_attempts);
                tokio::time::sleep(policy.interval).await;
                attempt += 1;
            }
            Err(e) => {
                tracing::error!(
                    "Failed to connect to database after {} attempts: {}",
                    max_attempts,
                    e
                );
                return Err(SchemaError::Unreachable {
                    attempts: max_attempts,
                    source: e,
                });
            }
        }
    }
}

/// Create the `todos` table if it does not exist.
///
/// Runs as a single auto-committed statement; safe to call on every start.
pub async fn create_schema<'e, E>(executor: E) -> Result<(), SchemaError>
where
    E: PgExecutor<'e>,
{
    match sqlx::query(CREATE_TODOS_TABLE).execute(executor).await {
        Ok(_) => {
            tracing::info!("Database initialized successfully");
            Ok(())
        }
        Err(e) => {
            tracing::error!("Database initialization error: {}", e);
            Err(SchemaError::Create(e))
        }
    }
}

/// Wait for the database, then ensure the schema exists.
///
/// Uses its own short-lived connection so it can run before any pool is
/// built, or as a standalone bootstrap step.
pub async fn initialize(config: &DbConfig, policy: &RetryPolicy) -> Result<(), SchemaError> {
    wait_for_ready(config, policy).await?;

    let mut conn = PgConnection::connect_with(&config.connect_options())
        .await
        .map_err(SchemaError::Create)?;
    let result = create_schema(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::debug!("closing schema connection failed: {}", e);
    }
    result
}
