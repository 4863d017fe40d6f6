/// Health check endpoint
///
/// # Endpoint
///
/// ```text
/// GET /health
/// ```
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "database": "connected",
///   "connections": { "active": 0, "idle": 1, "total": 1 }
/// }
/// ```
///
/// Always `200 OK`; a failing database shows up as `"degraded"`.

use crate::app::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use todo_shared::db::pool;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `healthy` or `degraded`
    pub status: String,

    /// Application version
    pub version: String,

    /// `connected` or `disconnected`
    pub database: String,

    /// Pool usage at the time of the check
    pub connections: ConnectionCounts,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ConnectionCounts {
    pub active: usize,
    pub idle: usize,
    pub total: usize,
}

/// Health check handler
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let connected = match pool::health_check(&state.db).await {
        Ok(()) => true,
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            false
        }
    };
    let stats = pool::get_pool_stats(&state.db);

    Json(HealthResponse {
        status: if connected { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if connected { "connected" } else { "disconnected" }.to_string(),
        connections: ConnectionCounts {
            active: stats.active_connections,
            idle: stats.idle_connections,
            total: stats.total_connections,
        },
    })
}
