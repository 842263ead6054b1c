//! Todo repository
//!
//! - list: newest first by `created_at`
//! - create: INSERT ... RETURNING id
//! - update: COALESCE per column, `updated_at` always refreshed
//! - delete: rows affected decides not-found

use sqlx::PgPool;

use crate::models::{NewTodo, Todo, TodoPatch};

// Casts keep tables created with plain TIMESTAMP columns readable.
const LIST_TODOS: &str = r#"
    SELECT
        id,
        title,
        description,
        completed,
        created_at::timestamptz AS created_at,
        updated_at::timestamptz AS updated_at
    FROM todos
    ORDER BY created_at DESC
"#;

const INSERT_TODO: &str = r#"
    INSERT INTO todos (title, description)
    VALUES ($1, $2)
    RETURNING id
"#;

// NULL binds leave the column as it was.
const UPDATE_TODO: &str = r#"
    UPDATE todos SET
        title = COALESCE($1, title),
        description = COALESCE($2, description),
        completed = COALESCE($3, completed),
        updated_at = CURRENT_TIMESTAMP
    WHERE id = $4
"#;

const DELETE_TODO: &str = "DELETE FROM todos WHERE id = $1";

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("{0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("todo {id} not found")]
    NotFound { id: i32 },
}

/// Todo repository
pub struct TodoRepo<'a> {
    pool: &'a PgPool,
}

impl<'a> TodoRepo<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// All todos, newest first. Ties keep the database's row order.
    pub async fn list(&self) -> Result<Vec<Todo>, DbError> {
        let todos = sqlx::query_as::<_, Todo>(LIST_TODOS)
            .fetch_all(self.pool)
            .await?;

        Ok(todos)
    }

    /// Insert a todo and return its id. Timestamps and `completed` come from
    /// column defaults.
    pub async fn create(&self, todo: &NewTodo) -> Result<i32, DbError> {
        let (id,): (i32,) = sqlx::query_as(INSERT_TODO)
            .bind(todo.title.as_str())
            .bind(&todo.description)
            .fetch_one(self.pool)
            .await?;

        tracing::debug!(id, "todo created");
        Ok(id)
    }

    /// Apply a partial update.
    ///
    /// An empty patch still runs and refreshes `updated_at`.
    pub async fn update(&self, id: i32, patch: &TodoPatch) -> Result<(), DbError> {
        let result = sqlx::query(UPDATE_TODO)
            .bind(patch.title.as_deref())
            .bind(patch.description.as_deref())
            .bind(patch.completed)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, empty_patch = patch.is_empty(), "todo updated");
        Ok(())
    }

    /// Delete a todo by id.
    pub async fn delete(&self, id: i32) -> Result<(), DbError> {
        let result = sqlx::query(DELETE_TODO)
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::NotFound { id });
        }

        tracing::debug!(id, "todo deleted");
        Ok(())
    }
}
