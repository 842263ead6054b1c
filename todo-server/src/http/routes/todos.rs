//! Todo endpoints
//!
//! Each handler runs exactly one statement through [`TodoRepo`].

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};

use crate::db::repos::TodoRepo;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, TodoId};
use crate::http::server::AppState;
use crate::models::{NewTodo, Todo, TodoPatch};

/// Create todo request
#[derive(Debug, Default, Deserialize)]
pub struct CreateTodoRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Todo response
#[derive(Debug, Serialize, Deserialize)]
pub struct TodoResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl From<Todo> for TodoResponse {
    fn from(t: Todo) -> Self {
        Self {
            id: t.id,
            title: t.title,
            description: t.description.unwrap_or_default(),
            completed: t.completed.unwrap_or(false),
            created_at: t.created_at.map(|ts| ts.to_rfc3339()),
            updated_at: t.updated_at.map(|ts| ts.to_rfc3339()),
        }
    }
}

/// Create response
#[derive(Debug, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
    pub message: String,
}

/// Plain confirmation message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// GET /api/todos - all todos, newest first
async fn list_todos(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let todos = TodoRepo::new(&state.pool).list().await?;
    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /api/todos - create a todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTodoRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    // Validate before touching the database
    let todo = NewTodo::new(req.title.as_deref(), req.description.as_deref())?;
    let id = TodoRepo::new(&state.pool).create(&todo).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            id,
            message: "Todo created successfully".to_string(),
        }),
    ))
}

/// PUT /api/todos/{id} - partial update
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    JsonBody(patch): JsonBody<TodoPatch>,
) -> Result<Json<MessageResponse>, ApiError> {
    TodoRepo::new(&state.pool).update(id, &patch).await?;
    Ok(Json(MessageResponse::new("Todo updated successfully")))
}

/// DELETE /api/todos/{id}
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<MessageResponse>, ApiError> {
    TodoRepo::new(&state.pool).delete(id).await?;
    Ok(Json(MessageResponse::new("Todo deleted successfully")))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/todos", get(list_todos).post(create_todo))
        .route("/api/todos/{id}", put(update_todo).delete(delete_todo))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn response_renders_timestamps_as_rfc3339() {
        let created = Utc.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let todo = Todo {
            id: 9,
            title: "Ship it".into(),
            description: None,
            completed: None,
            created_at: Some(created),
            updated_at: None,
        };

        let body = serde_json::to_value(TodoResponse::from(todo)).unwrap();
        assert_eq!(body["id"], 9);
        assert_eq!(body["description"], "");
        assert_eq!(body["completed"], false);
        assert_eq!(body["created_at"], "2024-03-01T12:30:00+00:00");
        assert!(body["updated_at"].is_null());
    }

    #[test]
    fn create_request_fields_are_optional() {
        let req: CreateTodoRequest = serde_json::from_str("{}").unwrap();
        assert!(req.title.is_none());
        assert!(req.description.is_none());
    }
}
