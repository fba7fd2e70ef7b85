//! Priority value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// How important keeping in touch with a person is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PriorityLevel {
    High,
    Medium,
    Low,
}

impl PriorityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

/// A person's priority. Input is case-insensitive and accepts one-letter
/// abbreviations; the value is kept as its [`PriorityLevel`].
///
/// # Example
///
/// ```
/// use networkbook::domain::{Priority, PriorityLevel};
///
/// let priority = Priority::new("H").unwrap();
/// assert_eq!(priority.level(), PriorityLevel::High);
/// assert_eq!(priority.to_string(), "high");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Priority {
    level: PriorityLevel,
}

impl Priority {
    pub const MESSAGE_CONSTRAINTS: &'static str =
        "Priority should be one of high, medium or low (or h, m, l), case-insensitive";

    /// Create a new Priority from its textual form.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPriority` if the text names no level.
    pub fn new(priority: impl Into<String>) -> Result<Self, ValidationError> {
        let priority = priority.into();
        match Self::parse_level(&priority) {
            Some(level) => Ok(Self { level }),
            None => Err(ValidationError::InvalidPriority(priority)),
        }
    }

    /// Map textual input to a level, ignoring case.
    pub fn parse_level(priority: &str) -> Option<PriorityLevel> {
        match priority.to_ascii_lowercase().as_str() {
            "high" | "h" => Some(PriorityLevel::High),
            "medium" | "m" => Some(PriorityLevel::Medium),
            "low" | "l" => Some(PriorityLevel::Low),
            _ => None,
        }
    }

    pub fn is_valid(priority: &str) -> bool {
        Self::parse_level(priority).is_some()
    }

    pub fn level(&self) -> PriorityLevel {
        self.level
    }
}

impl From<PriorityLevel> for Priority {
    fn from(level: PriorityLevel) -> Self {
        Self { level }
    }
}

impl Serialize for Priority {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.level.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Priority::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.level.as_str())
    }
}
