//! The registry store.

use tracing::debug;

use crate::clock::{Clock, LocalClock};
use crate::error::StoreError;
use crate::model::{
    Course, CourseId, CourseInput, Participant, ParticipantFilter, ParticipantId,
    ParticipantInput,
};

/// Result of a successful [`RegistryStore::delete_course`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRemoval {
    pub course: Course,
    /// Number of participants removed along with the course.
    pub participants_removed: usize,
}

/// Courses and participants, kept in insertion order.
///
/// All checks of an operation run before any mutation, so a rejected call
/// never leaves partial changes behind. Cascades (participant removal on
/// course delete, participant retargeting on course id change) complete
/// before the operation returns.
#[derive(Debug)]
pub struct RegistryStore {
    courses: Vec<Course>,
    participants: Vec<Participant>,
    clock: Box<dyn Clock>,
}

impl RegistryStore {
    /// Create an empty store stamping records with local wall-clock time.
    pub fn new() -> Self {
        Self::with_clock(LocalClock)
    }

    /// Create an empty store with a custom clock.
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self {
            courses: Vec::new(),
            participants: Vec::new(),
            clock: Box::new(clock),
        }
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// Look up a course by id.
    pub fn course(&self, course_id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Look up a participant by id.
    pub fn participant(&self, participant_id: ParticipantId) -> Option<&Participant> {
        self.participants.iter().find(|p| p.id == participant_id)
    }

    fn course_index(&self, course_id: CourseId) -> Option<usize> {
        self.courses.iter().position(|c| c.id == course_id)
    }

    fn participant_index(&self, participant_id: ParticipantId) -> Option<usize> {
        self.participants.iter().position(|p| p.id == participant_id)
    }

    fn course_exists(&self, course_id: CourseId) -> bool {
        self.courses.iter().any(|c| c.id == course_id)
    }

    // ------------------------------------------------------------------
    // Courses
    // ------------------------------------------------------------------

    /// All courses in insertion order.
    pub fn list_courses(&self) -> &[Course] {
        &self.courses
    }

    /// Store a new course.
    ///
    /// Rejects a taken id first, then a taken name.
    pub fn create_course(&mut self, input: CourseInput) -> Result<Course, StoreError> {
        if self.course_exists(input.id) {
            return Err(StoreError::DuplicateCourseId(input.id));
        }
        if self.courses.iter().any(|c| c.name == input.name) {
            return Err(StoreError::DuplicateCourseName(input.name));
        }

        let course = Course {
            id: input.id,
            name: input.name,
            instructor: input.instructor,
            created_at: Some(self.clock.stamp()),
        };
        self.courses.push(course.clone());
        Ok(course)
    }

    /// Overwrite id, name and instructor of an existing course.
    ///
    /// The new id and name must not belong to another course. When the id
    /// changes, every participant of the old id is moved to the new one.
    /// `created_at` is kept.
    pub fn update_course(
        &mut self,
        course_id: CourseId,
        replacement: CourseInput,
    ) -> Result<Course, StoreError> {
        let index = self
            .course_index(course_id)
            .ok_or(StoreError::CourseNotFound(course_id))?;

        if self
            .courses
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.id == replacement.id)
        {
            return Err(StoreError::DuplicateCourseId(replacement.id));
        }
        if self
            .courses
            .iter()
            .enumerate()
            .any(|(i, c)| i != index && c.name == replacement.name)
        {
            return Err(StoreError::DuplicateCourseName(replacement.name));
        }

        let new_id = replacement.id;
        let course = &mut self.courses[index];
        course.id = replacement.id;
        course.name = replacement.name;
        course.instructor = replacement.instructor;
        let updated = course.clone();

        if new_id != course_id {
            let moved = self.retarget_participants(course_id, new_id);
            debug!(
                "Course id {} -> {}: retargeted {} participant(s)",
                course_id, new_id, moved
            );
        }

        Ok(updated)
    }

    /// Point every participant of `old_id` at `new_id`.
    fn retarget_participants(&mut self, old_id: CourseId, new_id: CourseId) -> usize {
        let mut moved = 0;
        for participant in self
            .participants
            .iter_mut()
            .filter(|p| p.course_id == old_id)
        {
            participant.course_id = new_id;
            moved += 1;
        }
        moved
    }

    /// Remove a course together with all of its participants.
    pub fn delete_course(&mut self, course_id: CourseId) -> Result<CourseRemoval, StoreError> {
        let index = self
            .course_index(course_id)
            .ok_or(StoreError::CourseNotFound(course_id))?;

        let course = self.courses.remove(index);

        let before = self.participants.len();
        self.participants.retain(|p| p.course_id != course_id);
        let participants_removed = before - self.participants.len();

        debug!(
            "Deleted course {} and {} participant(s)",
            course_id, participants_removed
        );

        Ok(CourseRemoval {
            course,
            participants_removed,
        })
    }

    // ------------------------------------------------------------------
    // Participants
    // ------------------------------------------------------------------

    /// Participants in insertion order, optionally restricted to one course.
    ///
    /// Filtering by a course that does not exist is an error, not an empty list.
    pub fn list_participants(
        &self,
        filter: ParticipantFilter,
    ) -> Result<Vec<Participant>, StoreError> {
        match filter {
            ParticipantFilter::All => Ok(self.participants.clone()),
            ParticipantFilter::OfCourse(course_id) => {
                if !self.course_exists(course_id) {
                    return Err(StoreError::CourseNotFound(course_id));
                }
                Ok(self
                    .participants
                    .iter()
                    .filter(|p| p.course_id == course_id)
                    .cloned()
                    .collect())
            }
        }
    }

    /// Store a new participant.
    ///
    /// The referenced course must exist; checked before the id.
    pub fn create_participant(
        &mut self,
        input: ParticipantInput,
    ) -> Result<Participant, StoreError> {
        if !self.course_exists(input.course_id) {
            return Err(StoreError::CourseNotFound(input.course_id));
        }
        if self.participant_index(input.id).is_some() {
            return Err(StoreError::DuplicateParticipantId(input.id));
        }

        let participant = Participant {
            id: input.id,
            name: input.name,
            course_id: input.course_id,
            created_at: Some(self.clock.stamp()),
        };
        self.participants.push(participant.clone());
        Ok(participant)
    }

    /// Overwrite id, name and course of an existing participant.
    ///
    /// Same rules as creation: the course must exist and the new id must not
    /// belong to another participant. `created_at` is kept.
    pub fn update_participant(
        &mut self,
        participant_id: ParticipantId,
        replacement: ParticipantInput,
    ) -> Result<Participant, StoreError> {
        let index = self
            .participant_index(participant_id)
            .ok_or(StoreError::ParticipantNotFound(participant_id))?;

        if !self.course_exists(replacement.course_id) {
            return Err(StoreError::CourseNotFound(replacement.course_id));
        }
        if self
            .participants
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p.id == replacement.id)
        {
            return Err(StoreError::DuplicateParticipantId(replacement.id));
        }

        let participant = &mut self.participants[index];
        participant.id = replacement.id;
        participant.name = replacement.name;
        participant.course_id = replacement.course_id;
        Ok(participant.clone())
    }
}

impl Default for RegistryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
