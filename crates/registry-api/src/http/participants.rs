//! Participant HTTP handlers.
//!
//! - GET  /participants[?course_id=N]          - List participants
//! - POST /participants                        - Create participant
//! - PUT  /participants/{participant_id}       - Update participant

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Deserialize;
use tracing::{debug, info, warn};

use registry_store::{CourseId, Participant, ParticipantFilter, ParticipantId, ParticipantInput};

use crate::error::{ApiError, ApiResult};
use crate::http::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::AppState;

/// Query parameters for listing participants.
#[derive(Debug, Default, Deserialize)]
pub struct ParticipantQuery {
    pub course_id: Option<CourseId>,
}

/// List participants, optionally only those of one course.
///
/// GET /participants
pub async fn list_participants(
    State(state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<ParticipantQuery>,
) -> ApiResult<Json<Vec<Participant>>> {
    let filter = ParticipantFilter::from(query.course_id);
    let store = state.store.read().await;
    let participants = store.list_participants(filter)?;
    debug!("Listing {} participant(s) ({:?})", participants.len(), filter);
    Ok(Json(participants))
}

/// Create a participant in an existing course.
///
/// POST /participants
pub async fn create_participant(
    State(state): State<Arc<AppState>>,
    ApiJson(input): ApiJson<ParticipantInput>,
) -> ApiResult<Json<Participant>> {
    input.validate().map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let participant = store.create_participant(input).inspect_err(|e| {
        warn!("Rejected participant creation: {}", e);
    })?;

    info!(
        "Created participant {} in course {}",
        participant.id, participant.course_id
    );
    Ok(Json(participant))
}

/// Replace a participant's id, name and course.
///
/// PUT /participants/{participant_id}
pub async fn update_participant(
    State(state): State<Arc<AppState>>,
    ApiPath(participant_id): ApiPath<ParticipantId>,
    ApiJson(replacement): ApiJson<ParticipantInput>,
) -> ApiResult<Json<Participant>> {
    replacement.validate().map_err(ApiError::Validation)?;

    let mut store = state.store.write().await;
    let participant = store
        .update_participant(participant_id, replacement)
        .inspect_err(|e| {
            warn!("Rejected update of participant {}: {}", participant_id, e);
        })?;

    info!("Updated participant {} (now {})", participant_id, participant.id);
    Ok(Json(participant))
}
