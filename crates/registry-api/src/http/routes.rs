//! HTTP route definitions.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, put},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::http::courses;
use crate::http::monitoring;
use crate::http::participants;
use crate::state::AppState;

/// Create the registry router.
///
/// ## Route Structure
///
/// ```text
/// /courses
///   GET    /courses                       - List courses
///   POST   /courses                       - Create course
///   PUT    /courses/{course_id}           - Update course (id changes retarget participants)
///   DELETE /courses/{course_id}           - Delete course and its participants
///
/// /participants
///   GET    /participants[?course_id=N]    - List participants
///   POST   /participants                  - Create participant
///   PUT    /participants/{participant_id} - Update participant
///
/// /health  - Health check with record counts
/// /metrics - Prometheus metrics
/// /livez   - Liveness probe (Kubernetes)
/// /readyz  - Readiness probe (Kubernetes)
/// ```
pub fn create_router(state: Arc<AppState>) -> Router {
    let course_routes = Router::new()
        .route("/", get(courses::list_courses).post(courses::create_course))
        .route(
            "/{course_id}",
            put(courses::update_course).delete(courses::delete_course),
        );

    let participant_routes = Router::new()
        .route(
            "/",
            get(participants::list_participants).post(participants::create_participant),
        )
        .route("/{participant_id}", put(participants::update_participant));

    let monitoring_routes = Router::new()
        .route("/health", get(monitoring::health_check))
        .route("/metrics", get(monitoring::prometheus_metrics))
        .route("/readyz", get(monitoring::readiness_probe))
        .route("/livez", get(monitoring::liveness_probe));

    Router::new()
        .nest("/courses", course_routes)
        .nest("/participants", participant_routes)
        .merge(monitoring_routes)
        .layer(middleware::from_fn_with_state(state.clone(), count_requests))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn count_requests(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    state.increment_requests();
    next.run(request).await
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
