//! Tag value object.

use super::errors::ValidationError;

/// A single-word label attached to a person.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String);

impl Tag {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Tags names should be alphanumeric";

    /// Create a new Tag.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidTag` unless the tag is a non-empty
    /// run of ASCII letters and digits.
    pub fn new(tag: impl Into<String>) -> Result<Self, ValidationError> {
        let tag = tag.into();
        if !Self::is_valid(&tag) {
            return Err(ValidationError::InvalidTag(tag));
        }
        Ok(Self(tag))
    }

    /// Returns true if `tag` is a valid tag name.
    pub fn is_valid(tag: &str) -> bool {
        !tag.is_empty() && tag.chars().all(|c| c.is_ascii_alphanumeric())
    }
}

string_value_object!(Tag);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_validity() {
        assert!(Tag::is_valid("friend"));
        assert!(Tag::is_valid("CS2103T"));
        assert!(!Tag::is_valid(""));
        assert!(!Tag::is_valid("#friend"));
        assert!(!Tag::is_valid("best friend"));
    }
}
