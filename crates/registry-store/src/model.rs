//! Course and participant records.

use serde::{Deserialize, Serialize};

pub type CourseId = i64;
pub type ParticipantId = i64;

/// A stored course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub name: String,
    pub instructor: String,
    /// Set once at creation, never changed by updates.
    pub created_at: Option<String>,
}

/// Client-supplied course fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseInput {
    pub id: CourseId,
    pub name: String,
    pub instructor: String,
}

impl CourseInput {
    pub fn new(id: CourseId, name: impl Into<String>, instructor: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            instructor: instructor.into(),
        }
    }
}

/// A stored participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
    pub course_id: CourseId,
    pub created_at: Option<String>,
}

/// Client-supplied participant fields, used for both create and update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantInput {
    pub id: ParticipantId,
    pub name: String,
    pub course_id: CourseId,
}

impl ParticipantInput {
    pub fn new(id: ParticipantId, name: impl Into<String>, course_id: CourseId) -> Self {
        Self {
            id,
            name: name.into(),
            course_id,
        }
    }
}

/// Which participants to list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ParticipantFilter {
    #[default]
    All,
    /// Only participants of this course. The course must exist.
    OfCourse(CourseId),
}

impl From<Option<CourseId>> for ParticipantFilter {
    fn from(course_id: Option<CourseId>) -> Self {
        match course_id {
            Some(id) => ParticipantFilter::OfCourse(id),
            None => ParticipantFilter::All,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_input_ignores_created_at() {
        let json = r#"{"id": 1, "name": "Algo", "instructor": "Ada", "created_at": "forged"}"#;
        let input: CourseInput = serde_json::from_str(json).unwrap();
        assert_eq!(input, CourseInput::new(1, "Algo", "Ada"));
    }

    #[test]
    fn test_course_serializes_null_created_at() {
        let course = Course {
            id: 1,
            name: "Algo".to_string(),
            instructor: "Ada".to_string(),
            created_at: None,
        };
        let json = serde_json::to_value(&course).unwrap();
        assert!(json["created_at"].is_null());
        assert_eq!(json["instructor"], "Ada");
    }

    #[test]
    fn test_participant_input_requires_course_id() {
        let json = r#"{"id": 10, "name": "Bob"}"#;
        assert!(serde_json::from_str::<ParticipantInput>(json).is_err());
    }

    #[test]
    fn test_filter_from_option() {
        assert_eq!(ParticipantFilter::from(None), ParticipantFilter::All);
        assert_eq!(ParticipantFilter::from(Some(3)), ParticipantFilter::OfCourse(3));
        assert_eq!(ParticipantFilter::default(), ParticipantFilter::All);
    }
}
