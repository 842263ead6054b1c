//! todo-server: JSON API over a PostgreSQL `todos` table
//!
//! List, create, update and delete todo records, plus a health check and a
//! static API descriptor. The schema initializer in [`db::schema`] must run
//! before the server takes traffic.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{ConfigError, DbConfig};
pub use db::{create_pool, initialize, RetryPolicy, SchemaError};
pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
