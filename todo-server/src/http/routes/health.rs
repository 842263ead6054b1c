//! Health check endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;
use sqlx::postgres::PgConnection;
use sqlx::Connection;

use crate::http::server::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum HealthResponse {
    Healthy {
        status: &'static str,
        database: &'static str,
    },
    Unhealthy {
        status: &'static str,
        error: String,
    },
}

/// GET /health - open a fresh connection and close it again.
///
/// Bypasses the pool, so a down database answers at once with the driver's
/// error rather than after the pool's acquire timeout.
async fn health(State(state): State<Arc<AppState>>) -> (StatusCode, Json<HealthResponse>) {
    match PgConnection::connect_with(&state.connect_options).await {
        Ok(conn) => {
            if let Err(e) = conn.close().await {
                tracing::debug!("closing health check connection failed: {}", e);
            }
            (
                StatusCode::OK,
                Json(HealthResponse::Healthy {
                    status: "healthy",
                    database: "connected",
                }),
            )
        }
        Err(e) => {
            tracing::warn!("Health check failed: {}", e);
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse::Unhealthy {
                    status: "unhealthy",
                    error: e.to_string(),
                }),
            )
        }
    }
}

/// Health routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unhealthy_serializes_flat() {
        let body = serde_json::to_value(HealthResponse::Unhealthy {
            status: "unhealthy",
            error: "connection refused".into(),
        })
        .unwrap();

        assert_eq!(body["status"], "unhealthy");
        assert_eq!(body["error"], "connection refused");
        assert!(body.get("database").is_none());
    }
}
