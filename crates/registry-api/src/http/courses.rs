//! Course HTTP handlers.
//!
//! - GET    /courses              - List courses
//! - POST   /courses              - Create course
//! - PUT    /courses/{course_id}  - Update course
//! - DELETE /courses/{course_id}  - Delete course and its participants

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use registry_store::{Course, CourseId, CourseInput};

use crate::error::{ApiError, ApiResult};
use crate::http::extract::{ApiJson, ApiPath};
use crate::state::AppState;

/// Response for a deleted course.
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteCourseResponse {
    pub detail: String,
    pub participants_removed: usize,
}

/// List all courses.
///
/// GET /courses
pub async fn list_courses(State(state): State<Arc<AppState>>) -> Json<Vec<Course>> {
    let store = state.store.read().await;
    debug!("Listing {} course(s)", store.course_count());
    Json(store.list_courses().to_vec())
}

/// Create a course.
///
/// POST /courses
pub async fn create_course(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<CourseInput>,
) -> ApiResult<Json<Course>> {
    input.validate().map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let course = store.create_course(input).inspect_err(|e| {
        warn!("Rejected course creation: {}", e);
    })?;

    info!("Created course {} ({})", course.id, course.name);
    Ok(Json(course))
}

/// Replace a course's id, name and instructor.
///
/// PUT /courses/{course_id}
pub async fn update_course(
    State(state): State<Arc<AppState>>,
    ApiPath(course_id): ApiPath<CourseId>,
    ApiJson(replacement): ApiJson<CourseInput>,
) -> ApiResult<Json<Course>> {
    replacement.validate().map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let course = store.update_course(course_id, replacement).inspect_err(|e| {
        warn!("Rejected update of course {}: {}", course_id, e);
    })?;

    info!("Updated course {} (now {})", course_id, course.id);
    Ok(Json(course))
}

/// Delete a course and every participant enrolled in it.
///
/// DELETE /courses/{course_id}
pub async fn delete_course(
    State(state): State<Arc<AppState>>,
    ApiPath(course_id): ApiPath<CourseId>,
) -> ApiResult<Json<DeleteCourseResponse>> {
    let mut store = state.store.write().await;
    let removal = store.delete_course(course_id).inspect_err(|e| {
        warn!("Rejected deletion of course {}: {}", course_id, e);
    })?;

    info!(
        "Deleted course {} with {} participant(s)",
        course_id, removal.participants_removed
    );
    Ok(Json(DeleteCourseResponse {
        detail: format!("Course {} deleted.", removal.course.id),
        participants_removed: removal.participants_removed,
    }))
}
