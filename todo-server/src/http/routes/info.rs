//! API descriptor endpoint

use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

/// GET / - static service description, never touches the database
async fn index() -> Json<Value> {
    Json(json!({
        "name": "Todo API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "GET /health": "Health check",
            "GET /api/todos": "Get all todos",
            "POST /api/todos": "Create todo",
            "PUT /api/todos/:id": "Update todo",
            "DELETE /api/todos/:id": "Delete todo"
        }
    }))
}

/// Info routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(index))
}
