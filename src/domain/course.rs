//! Course value object.

use super::errors::ValidationError;

/// A course a person has taken or is taking, e.g. `CS2103T`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Course(String);

impl Course {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Course names can take any values, and it should not be blank";

    /// Create a new Course.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidCourse` if the course is blank or
    /// starts with whitespace.
    pub fn new(course: impl Into<String>) -> Result<Self, ValidationError> {
        let course = course.into();
        if !Self::is_valid(&course) {
            return Err(ValidationError::InvalidCourse(course));
        }
        Ok(Self(course))
    }

    pub fn is_valid(course: &str) -> bool {
        course.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

string_value_object!(Course);
