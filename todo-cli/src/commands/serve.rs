//! HTTP server command
//!
//! Ensures the schema exists, then serves the todo API until shutdown.

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use todo_server::{run_server, AppState, RetryPolicy, ServerConfig};

use crate::config::{DbArgs, RetryArgs};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value_t = ServerConfig::default().bind_addr)]
    pub bind: SocketAddr,

    #[command(flatten)]
    pub db: DbArgs,

    #[command(flatten)]
    pub retry: RetryArgs,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_config = args.db.into_config().context("Invalid database configuration")?;
    let policy = RetryPolicy::from(args.retry);

    // Schema must exist before the first request
    todo_server::initialize(&db_config, &policy)
        .await
        .context("Database initialization failed")?;

    tracing::info!("Starting todo API on {}", args.bind);

    let state = AppState::new(&db_config);
    let config = ServerConfig {
        bind_addr: args.bind,
    };

    // Run server (blocks until shutdown)
    run_server(state, config).await.context("Server error")?;

    Ok(())
}
