//! Graduation value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static GRADUATION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^AY([0-9]{2})([0-9]{2})-S([12])$").expect("Failed to compile graduation regex")
});

/// The semester a person graduates (or graduated) in, e.g. `AY2324-S2`.
///
/// Values are stored upper-case; the parser normalises input before
/// constructing one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Graduation(String);

impl Graduation {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Graduation should be of the form AYxxyy-Sz, \
where xx and yy are the last two digits of two consecutive years and z is 1 or 2, e.g. AY2324-S2";

    /// Create a new Graduation.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidGraduation` if the value is not of
    /// the form `AYxxyy-Sz` with consecutive years.
    pub fn new(graduation: impl Into<String>) -> Result<Self, ValidationError> {
        let graduation = graduation.into();
        if !Self::is_valid(&graduation) {
            return Err(ValidationError::InvalidGraduation(graduation));
        }
        Ok(Self(graduation))
    }

    pub fn is_valid(graduation: &str) -> bool {
        Self::captures(graduation).is_some()
    }

    /// Splits a graduation string into (first year, second year, semester).
    fn captures(graduation: &str) -> Option<(u32, u32, u8)> {
        let caps = GRADUATION_REGEX.captures(graduation)?;
        let first: u32 = caps[1].parse().ok()?;
        let second: u32 = caps[2].parse().ok()?;
        let semester: u8 = caps[3].parse().ok()?;
        if (first + 1) % 100 != second {
            return None;
        }
        Some((first, second, semester))
    }

    /// Calendar year the academic year starts in, assuming the 2000s.
    pub fn academic_year_start(&self) -> u32 {
        Self::captures(&self.0).map_or(0, |(first, _, _)| 2000 + first)
    }

    /// Semester number, 1 or 2.
    pub fn semester(&self) -> u8 {
        Self::captures(&self.0).map_or(0, |(_, _, semester)| semester)
    }

    /// Long form, e.g. `AY2023/2024 Semester 2`.
    pub fn full_string(&self) -> String {
        let start = self.academic_year_start();
        format!("AY{}/{} Semester {}", start, start + 1, self.semester())
    }
}

string_value_object!(Graduation);
