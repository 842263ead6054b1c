//! Database layer - connection pool, schema bootstrap and repositories
//!
//! - Bounded pool, one connection acquired per statement
//! - Every write is a single auto-committed statement
//! - Schema is one idempotent CREATE TABLE IF NOT EXISTS

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;
pub use schema::{create_schema, initialize, wait_for_ready, RetryPolicy, SchemaError};
