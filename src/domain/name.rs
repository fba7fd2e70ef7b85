//! Name value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static NAME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 ]*$").expect("Failed to compile name regex")
});

/// A person's name.
///
/// Names identify a person: two persons with equal names are treated as
/// the same person by the network book.
///
/// # Example
///
/// ```
/// use networkbook::domain::Name;
///
/// let name = Name::new("John Doe").unwrap();
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Names should only contain alphanumeric characters and spaces, and it should not be blank";

    /// Create a new Name, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidName` if the name is blank or holds
    /// characters other than ASCII letters, digits and spaces.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        if !Self::is_valid(&name) {
            return Err(ValidationError::InvalidName(name));
        }
        Ok(Self(name))
    }

    /// Returns true if `name` is a valid name.
    pub fn is_valid(name: &str) -> bool {
        NAME_REGEX.is_match(name)
    }
}

string_value_object!(Name);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_valid() {
        assert!(Name::is_valid("peter jack"));
        assert!(Name::is_valid("12345"));
        assert!(Name::is_valid("peter the 2nd"));
        assert!(Name::is_valid("Capital Tan"));
        assert!(Name::is_valid("David Roger Jackson Ray Jr 2nd"));
    }

    #[test]
    fn test_name_invalid() {
        assert!(!Name::is_valid(""));
        assert!(!Name::is_valid(" "));
        assert!(!Name::is_valid("^"));
        assert!(!Name::is_valid("peter*"));
        assert!(!Name::is_valid(" leading space"));
    }

    #[test]
    fn test_name_rejects_invalid_with_message() {
        let err = Name::new("peter*").unwrap_err();
        assert_eq!(err.to_string(), Name::MESSAGE_CONSTRAINTS);
    }

    #[test]
    fn test_name_serialization() {
        let name = Name::new("Amy Bee").unwrap();
        assert_eq!(serde_json::to_string(&name).unwrap(), "\"Amy Bee\"");
        let back: Name = serde_json::from_str("\"Amy Bee\"").unwrap();
        assert_eq!(back, name);
        assert!(serde_json::from_str::<Name>("\"Amy*\"").is_err());
    }
}
