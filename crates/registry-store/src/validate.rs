//! Field validation for client input.

use serde::Serialize;

use crate::model::{CourseInput, ParticipantInput};

pub const COURSE_NAME_MIN_LEN: usize = 1;
pub const COURSE_NAME_MAX_LEN: usize = 100;
pub const INSTRUCTOR_MIN_LEN: usize = 3;
pub const PARTICIPANT_NAME_MIN_LEN: usize = 3;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

fn check_min(errors: &mut Vec<ValidationError>, field: &str, value: &str, min: usize) {
    if value.chars().count() < min {
        errors.push(ValidationError::new(
            field,
            format!("must be at least {} characters", min),
        ));
    }
}

fn check_max(errors: &mut Vec<ValidationError>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        errors.push(ValidationError::new(
            field,
            format!("must be at most {} characters", max),
        ));
    }
}

fn finish(errors: Vec<ValidationError>) -> Result<(), Vec<ValidationError>> {
    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

impl CourseInput {
    /// Check name and instructor lengths, reporting every violation.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_min(&mut errors, "name", &self.name, COURSE_NAME_MIN_LEN);
        check_max(&mut errors, "name", &self.name, COURSE_NAME_MAX_LEN);
        check_min(&mut errors, "instructor", &self.instructor, INSTRUCTOR_MIN_LEN);
        finish(errors)
    }
}

impl ParticipantInput {
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();
        check_min(&mut errors, "name", &self.name, PARTICIPANT_NAME_MIN_LEN);
        finish(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_course() {
        assert!(CourseInput::new(1, "Algo", "Ada").validate().is_ok());
        assert!(CourseInput::new(1, "A", "Ada").validate().is_ok());
        assert!(CourseInput::new(1, "x".repeat(100), "Ada").validate().is_ok());
    }

    #[test]
    fn test_course_name_bounds() {
        let errors = CourseInput::new(1, "", "Ada").validate().unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");

        let errors = CourseInput::new(1, "x".repeat(101), "Ada")
            .validate()
            .unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("100"));
    }

    #[test]
    fn test_course_reports_all_violations() {
        let errors = CourseInput::new(1, "", "Al").validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "instructor"]);
    }

    #[test]
    fn test_lengths_count_characters_not_bytes() {
        // Three characters, six bytes.
        assert!(CourseInput::new(1, "Algo", "Éöü").validate().is_ok());
        assert!(ParticipantInput::new(1, "Zoë", 1).validate().is_ok());
    }

    #[test]
    fn test_participant_name_min() {
        assert!(ParticipantInput::new(10, "Bob", 1).validate().is_ok());
        let errors = ParticipantInput::new(10, "Bo", 1).validate().unwrap_err();
        assert_eq!(errors[0].field, "name");
        assert!(errors[0].message.contains("at least 3"));
    }
}
