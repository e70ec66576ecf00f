//! Monitoring and health check handlers.

use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

use crate::state::AppState;

// ============================================================================
// Health Check Types
// ============================================================================

/// Health status.
///
/// The registry has no external dependencies to degrade, so a process that
/// can answer is healthy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Overall status.
    pub status: HealthStatus,
    /// Version information.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_seconds: u64,
    /// Number of stored courses.
    pub courses: usize,
    /// Number of stored participants.
    pub participants: usize,
}

// ============================================================================
// Prometheus Metrics Types
// ============================================================================

/// Prometheus metrics response (text format).
#[derive(Debug)]
pub struct PrometheusMetrics {
    pub content: String,
}

impl IntoResponse for PrometheusMetrics {
    fn into_response(self) -> axum::response::Response {
        (
            [(axum::http::header::CONTENT_TYPE, "text/plain; version=0.0.4")],
            self.content,
        )
            .into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check with record counts.
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let store = state.store.read().await;
    Json(HealthResponse {
        status: HealthStatus::Healthy,
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime().as_secs(),
        courses: store.course_count(),
        participants: store.participant_count(),
    })
}

/// Prometheus metrics endpoint.
pub async fn prometheus_metrics(State(state): State<Arc<AppState>>) -> PrometheusMetrics {
    let (courses, participants) = {
        let store = state.store.read().await;
        (store.course_count(), store.participant_count())
    };

    let content = format!(
        r#"# HELP registry_up Whether the registry service is up
# TYPE registry_up gauge
registry_up 1

# HELP registry_uptime_seconds Uptime in seconds
# TYPE registry_uptime_seconds counter
registry_uptime_seconds {}

# HELP registry_info Service information
# TYPE registry_info gauge
registry_info{{version="{}"}} 1

# HELP registry_http_requests_total Total HTTP requests
# TYPE registry_http_requests_total counter
registry_http_requests_total {}

# HELP registry_courses Stored courses
# TYPE registry_courses gauge
registry_courses {}

# HELP registry_participants Stored participants
# TYPE registry_participants gauge
registry_participants {}
"#,
        state.uptime().as_secs(),
        env!("CARGO_PKG_VERSION"),
        state.request_count(),
        courses,
        participants,
    );

    PrometheusMetrics { content }
}

/// Liveness probe (Kubernetes).
pub async fn liveness_probe() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "alive"
    }))
}

/// Readiness probe (Kubernetes).
///
/// Ready once the store lock can be taken for reading.
pub async fn readiness_probe(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    let _store = state.store.read().await;
    Json(serde_json::json!({
        "status": "ready"
    }))
}

#[cfg(test)]
#[path = "monitoring_tests.rs"]
mod tests;
