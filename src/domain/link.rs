//! Link value object.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

static LINK_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?i:https?://)?([A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}(:[0-9]{1,5})?(/\S*)?$",
    )
    .expect("Failed to compile link regex")
});

/// A web link associated with a person, such as a profile or homepage.
///
/// The scheme is optional on input; [`Link::to_url`] adds `https://` when
/// it is missing.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link(String);

impl Link {
    pub const MESSAGE_CONSTRAINTS: &'static str = "Links should be of the form \
[http(s)://]domain[:port][/path] and adhere to the following constraints:\n\
1. The domain is made up of labels separated by periods, each starting and ending \
with an alphanumeric character.\n\
2. The domain must end with a top-level domain of at least 2 letters.\n\
3. The link must not contain any whitespace.";

    /// Create a new Link, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidLink` if the link format is invalid.
    pub fn new(link: impl Into<String>) -> Result<Self, ValidationError> {
        let link = link.into();
        if !Self::is_valid(&link) {
            return Err(ValidationError::InvalidLink(link));
        }
        Ok(Self(link))
    }

    /// Returns true if `link` is a valid link.
    pub fn is_valid(link: &str) -> bool {
        LINK_REGEX.is_match(link)
    }

    /// Returns true if the stored link already names its scheme.
    pub fn has_scheme(&self) -> bool {
        let lower = self.0.to_ascii_lowercase();
        lower.starts_with("http://") || lower.starts_with("https://")
    }

    /// The link as an absolute URL, defaulting to `https://`.
    pub fn to_url(&self) -> String {
        if self.has_scheme() {
            self.0.clone()
        } else {
            format!("https://{}", self.0)
        }
    }
}

string_value_object!(Link);
