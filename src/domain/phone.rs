//! Phone value object.

use super::errors::ValidationError;

/// A phone number made of digits only.
///
/// # Example
///
/// ```
/// use networkbook::domain::Phone;
///
/// let phone = Phone::new("91234567").unwrap();
/// assert_eq!(phone.as_str(), "91234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Phone numbers should only contain numbers, and it should be at least 3 digits long";

    /// Create a new Phone, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if the phone format is invalid.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();
        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }
        Ok(Self(phone))
    }

    /// Returns true if `phone` has at least 3 characters, all ASCII digits.
    pub fn is_valid(phone: &str) -> bool {
        phone.len() >= 3 && phone.chars().all(|c| c.is_ascii_digit())
    }
}

string_value_object!(Phone);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_validates_format() {
        assert!(!Phone::is_valid(""));
        assert!(!Phone::is_valid(" "));
        assert!(!Phone::is_valid("91"));
        assert!(!Phone::is_valid("phone"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
        assert!(!Phone::is_valid("+6591234567"));

        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(Phone::is_valid("124293842033123"));
    }

    #[test]
    fn test_phone_display() {
        let phone = Phone::new("93121534").unwrap();
        assert_eq!(format!("{}", phone), "93121534");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
