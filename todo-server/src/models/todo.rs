//! Todo record, creation input and partial updates

use chrono::{DateTime, Utc};
use serde::Deserialize;
use sqlx::FromRow;

use super::ValidationError;

/// Todo row as stored in the `todos` table.
///
/// Every column except `id` and `title` is nullable in the schema, so the
/// row type keeps them optional and the HTTP layer decides how to render
/// missing values.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Validated todo title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoTitle(String);

impl TodoTitle {
    /// Create a new title.
    ///
    /// # Rules
    /// - Surrounding whitespace is trimmed
    /// - Must be non-empty after trimming
    ///
    /// # Example
    /// ```
    /// use todo_server::models::TodoTitle;
    ///
    /// assert!(TodoTitle::new("Buy milk").is_ok());
    /// assert!(TodoTitle::new("").is_err());
    /// assert!(TodoTitle::new("   ").is_err());  // whitespace only
    /// ```
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ValidationError::Required { field: "title" });
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Get the title as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoTitle {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Input for creating a todo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: TodoTitle,
    /// Trimmed; empty when the caller supplied none
    pub description: String,
}

impl NewTodo {
    /// Validate raw create input. A missing title is treated like an
    /// empty one.
    pub fn new(title: Option<&str>, description: Option<&str>) -> Result<Self, ValidationError> {
        let title = TodoTitle::new(title.unwrap_or_default())?;
        let description = description.unwrap_or_default().trim().to_owned();

        Ok(Self { title, description })
    }
}

/// Partial update of a todo.
///
/// `None` means "leave the column alone"; JSON `null` and an absent key both
/// deserialize to `None`. `Some("")` is a real value and clears the text.
/// Update values are stored as given, without trimming.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
}

impl TodoPatch {
    /// True when no column would change besides `updated_at`.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.completed.is_none()
    }
}
