//! Store error types.

use thiserror::Error;

use crate::model::{CourseId, ParticipantId};

/// Coarse classification of a rejected operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A referenced course or participant does not exist.
    NotFound,
    /// A primary key is already taken.
    DuplicateId,
    /// A course name is already taken.
    DuplicateName,
}

/// Errors returned by [`RegistryStore`](crate::RegistryStore) operations.
///
/// A failed operation leaves both collections exactly as they were.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Course not found: {0}")]
    CourseNotFound(CourseId),

    #[error("Participant not found: {0}")]
    ParticipantNotFound(ParticipantId),

    #[error("Course ID already exists: {0}")]
    DuplicateCourseId(CourseId),

    #[error("Course name already exists: {0}")]
    DuplicateCourseName(String),

    #[error("Participant ID already exists: {0}")]
    DuplicateParticipantId(ParticipantId),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StoreError::CourseNotFound(_) | StoreError::ParticipantNotFound(_) => {
                ErrorKind::NotFound
            }
            StoreError::DuplicateCourseId(_) | StoreError::DuplicateParticipantId(_) => {
                ErrorKind::DuplicateId
            }
            StoreError::DuplicateCourseName(_) => ErrorKind::DuplicateName,
        }
    }
}
