//! Address value object.

use super::errors::ValidationError;

/// A free-form postal address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Address(String);

impl Address {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Addresses can take any values, and it should not be blank";

    /// Create a new Address.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidAddress` if the address is blank or
    /// starts with whitespace.
    pub fn new(address: impl Into<String>) -> Result<Self, ValidationError> {
        let address = address.into();
        if !Self::is_valid(&address) {
            return Err(ValidationError::InvalidAddress(address));
        }
        Ok(Self(address))
    }

    /// Returns true if `address` is non-empty and does not start with whitespace.
    pub fn is_valid(address: &str) -> bool {
        address.chars().next().is_some_and(|c| !c.is_whitespace())
    }
}

string_value_object!(Address);
