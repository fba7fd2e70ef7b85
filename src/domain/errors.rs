//! Domain validation errors.

use super::{
    Address, Course, Email, Graduation, Link, Name, Phone, Priority, Specialisation, Tag,
};
use std::fmt;

/// Errors that can occur during domain value object validation.
///
/// Each variant carries the rejected input. The display text is the fixed
/// constraint message of the corresponding value type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided name is invalid.
    InvalidName(String),

    /// The provided phone number is invalid.
    InvalidPhone(String),

    /// The provided email address is invalid.
    InvalidEmail(String),

    /// The provided link is invalid.
    InvalidLink(String),

    /// The provided address is invalid.
    InvalidAddress(String),

    /// The provided tag is invalid.
    InvalidTag(String),

    /// The provided course is invalid.
    InvalidCourse(String),

    /// The provided specialisation is invalid.
    InvalidSpecialisation(String),

    /// The provided graduation semester is invalid.
    InvalidGraduation(String),

    /// The provided priority is invalid.
    InvalidPriority(String),

    /// A one-based index of zero.
    ZeroIndex,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName(_) => write!(f, "{}", Name::MESSAGE_CONSTRAINTS),
            Self::InvalidPhone(_) => write!(f, "{}", Phone::MESSAGE_CONSTRAINTS),
            Self::InvalidEmail(_) => write!(f, "{}", Email::MESSAGE_CONSTRAINTS),
            Self::InvalidLink(_) => write!(f, "{}", Link::MESSAGE_CONSTRAINTS),
            Self::InvalidAddress(_) => write!(f, "{}", Address::MESSAGE_CONSTRAINTS),
            Self::InvalidTag(_) => write!(f, "{}", Tag::MESSAGE_CONSTRAINTS),
            Self::InvalidCourse(_) => write!(f, "{}", Course::MESSAGE_CONSTRAINTS),
            Self::InvalidSpecialisation(_) => {
                write!(f, "{}", Specialisation::MESSAGE_CONSTRAINTS)
            }
            Self::InvalidGraduation(_) => write!(f, "{}", Graduation::MESSAGE_CONSTRAINTS),
            Self::InvalidPriority(_) => write!(f, "{}", Priority::MESSAGE_CONSTRAINTS),
            Self::ZeroIndex => write!(f, "One-based index must be non-zero"),
        }
    }
}

impl std::error::Error for ValidationError {}
