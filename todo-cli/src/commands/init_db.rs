//! Standalone schema bootstrap
//!
//! Waits for PostgreSQL, creates the `todos` table if missing, and exits.
//! Meant to run once before the API container starts.

use anyhow::{Context, Result};
use clap::Parser;
use todo_server::RetryPolicy;

use crate::config::{DbArgs, RetryArgs};

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub retry: RetryArgs,
}

/// Wait for the database and create the schema
pub async fn run_init_db(args: InitDbArgs) -> Result<()> {
    let db_config = args.db.into_config().context("Invalid database configuration")?;
    let policy = RetryPolicy::from(args.retry);

    tracing::info!(?db_config, "Initializing database schema");

    todo_server::initialize(&db_config, &policy)
        .await
        .context("Database initialization failed")?;

    Ok(())
}
