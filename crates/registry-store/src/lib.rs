//! # Registry Store
//!
//! In-memory relational store for the course registry.
//!
//! Two collections live inside one [`RegistryStore`]:
//! - **Courses**: unique by `id` and by `name`
//! - **Participants**: unique by `id`, each pointing at a course via `course_id`
//!
//! Every mutation keeps the participant → course references consistent:
//! deleting a course removes its participants, and changing a course id
//! retargets them to the new id.
//!
//! The store is synchronous and owns its data outright. Callers that share it
//! across tasks wrap it in a single lock and hold that lock for the whole
//! operation.

mod clock;
mod error;
mod model;
mod store;
mod validate;

pub use clock::{Clock, FixedClock, LocalClock, CREATED_AT_FORMAT};
pub use error::{ErrorKind, StoreError};
pub use model::{Course, CourseId, CourseInput, Participant, ParticipantFilter, ParticipantId, ParticipantInput};
pub use store::{CourseRemoval, RegistryStore};
pub use validate::{
    ValidationError, COURSE_NAME_MAX_LEN, COURSE_NAME_MIN_LEN, INSTRUCTOR_MIN_LEN,
    PARTICIPANT_NAME_MIN_LEN,
};
