//! Specialisation value object.

use super::errors::ValidationError;

/// A person's area of specialisation, e.g. `Software Engineering`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specialisation(String);

impl Specialisation {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Specialisations can take any values, and it should not be blank";

    /// Create a new Specialisation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidSpecialisation` if the value is
    /// blank or starts with whitespace.
    pub fn new(specialisation: impl Into<String>) -> Result<Self, ValidationError> {
        let specialisation = specialisation.into();
        if !Self::is_valid(&specialisation) {
            return Err(ValidationError::InvalidSpecialisation(specialisation));
        }
        Ok(Self(specialisation))
    }

    pub fn is_valid(specialisation: &str) -> bool {
        specialisation
            .chars()
            .next()
            .is_some_and(|c| !c.is_whitespace())
    }
}

string_value_object!(Specialisation);
