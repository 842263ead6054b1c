//! Domain models with validation at construction
//!
//! Request input is validated when building these types, before any
//! statement reaches the database.

pub mod validation;
pub mod todo;

pub use validation::ValidationError;
pub use todo::{NewTodo, Todo, TodoPatch, TodoTitle};
