//! todoctl - run the todo API and bootstrap its database
//!
//! - `serve`: create the schema if needed, then serve HTTP
//! - `init-db`: wait for PostgreSQL and create the schema, then exit

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;
mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "Todo list JSON API backed by PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server (creates the schema first)
    Serve(commands::serve::ServeArgs),
    /// Wait for the database and create the todos table
    InitDb(commands::init_db::InitDbArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env before DbConfig::from_env reads DB_* variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::InitDb(args) => commands::run_init_db(args).await?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_defaults_to_port_5000_on_all_interfaces() {
        let cli = Cli::try_parse_from(["todoctl", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.bind, todo_server::ServerConfig::default().bind_addr);
                assert_eq!(args.bind.port(), 5000);
                assert!(args.bind.ip().is_unspecified());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
