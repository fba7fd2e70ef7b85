//! Email value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let local = r"[A-Za-z0-9]+([+_.\-][A-Za-z0-9]+)*";
    let label = r"[A-Za-z0-9]+(-[A-Za-z0-9]+)*";
    Regex::new(&format!(r"^{local}@({label}\.)*({label}){{2,}}$"))
        .expect("Failed to compile email regex")
});

/// A type-safe wrapper for email addresses.
///
/// # Example
///
/// ```
/// use networkbook::domain::Email;
///
/// let email = Email::new("amy@example.com").unwrap();
/// assert_eq!(email.local_part(), "amy");
/// assert_eq!(email.domain(), "example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Emails should be of the format local-part@domain \
and adhere to the following constraints:\n\
1. The local-part should only contain alphanumeric characters and these special characters, \
excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
separated by periods.\n\
The domain name must:\n    \
- end with a domain label at least 2 characters long\n    \
- have each domain label start and end with alphanumeric characters\n    \
- have each domain label consist of alphanumeric characters, separated only by hyphens, if any.";

    /// Create a new Email, validating the format.
    ///
    /// # Validation Rules
    ///
    /// - Local part: alphanumerics, optionally joined by single `+`, `_`, `.` or `-`
    /// - Exactly one '@'
    /// - Domain: hyphen-joined alphanumeric labels separated by '.', the last
    ///   label at least 2 characters long
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` if the email format is invalid.
    pub fn new(email: impl Into<String>) -> Result<Self, ValidationError> {
        let email = email.into();
        if !Self::is_valid(&email) {
            return Err(ValidationError::InvalidEmail(email));
        }
        Ok(Self(email))
    }

    /// Returns true if `email` is a valid email address.
    pub fn is_valid(email: &str) -> bool {
        EMAIL_REGEX.is_match(email)
    }

    /// Get the local part (before '@').
    pub fn local_part(&self) -> &str {
        self.0.split_once('@').map_or("", |(local, _)| local)
    }

    /// Get the domain part (after '@').
    pub fn domain(&self) -> &str {
        self.0.split_once('@').map_or("", |(_, domain)| domain)
    }
}

string_value_object!(Email);
