//! Repository implementations for database access
//!
//! Each repository method runs exactly one statement:
//! - No check-then-write; zero rows affected means not found
//! - Partial updates go through a fixed COALESCE statement, never string
//!   concatenation

pub mod todos;

pub use todos::{DbError, TodoRepo};
