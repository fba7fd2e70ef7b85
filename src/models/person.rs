//! Person record stored in the network book.

use crate::domain::{
    Address, Course, Email, Graduation, Link, Name, Phone, Priority, Specialisation, Tag,
    UniqueList,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A person in the user's network.
///
/// Every field holds an already-validated value object, so a `Person` can
/// only be built from valid data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    /// Full name, also the identity used for duplicate detection
    pub name: Name,

    /// Phone numbers
    #[serde(default, skip_serializing_if = "UniqueList::is_empty")]
    pub phones: UniqueList<Phone>,

    /// Email addresses
    #[serde(default, skip_serializing_if = "UniqueList::is_empty")]
    pub emails: UniqueList<Email>,

    /// Profile or homepage links
    #[serde(default, skip_serializing_if = "UniqueList::is_empty")]
    pub links: UniqueList<Link>,

    /// Postal address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,

    /// Graduation semester
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graduation: Option<Graduation>,

    /// Course of study
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub course: Option<Course>,

    /// Area of specialisation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialisation: Option<Specialisation>,

    /// Free-form labels
    #[serde(default, skip_serializing_if = "UniqueList::is_empty")]
    pub tags: UniqueList<Tag>,

    /// Contact priority
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
}

impl Person {
    /// Create a person with only a name set.
    pub fn new(name: Name) -> Self {
        Self {
            name,
            phones: UniqueList::new(),
            emails: UniqueList::new(),
            links: UniqueList::new(),
            address: None,
            graduation: None,
            course: None,
            specialisation: None,
            tags: UniqueList::new(),
            priority: None,
        }
    }

    /// Returns true if both persons have the same name.
    ///
    /// This is weaker than `==` and is what the network book uses to keep
    /// a single entry per person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if !self.phones.is_empty() {
            write!(f, "; Phones: {}", self.phones)?;
        }
        if !self.emails.is_empty() {
            write!(f, "; Emails: {}", self.emails)?;
        }
        if !self.links.is_empty() {
            write!(f, "; Links: {}", self.links)?;
        }
        if let Some(ref address) = self.address {
            write!(f, "; Address: {}", address)?;
        }
        if let Some(ref graduation) = self.graduation {
            write!(f, "; Graduation: {}", graduation)?;
        }
        if let Some(ref course) = self.course {
            write!(f, "; Course: {}", course)?;
        }
        if let Some(ref specialisation) = self.specialisation {
            write!(f, "; Specialisation: {}", specialisation)?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: {}", self.tags)?;
        }
        if let Some(ref priority) = self.priority {
            write!(f, "; Priority: {}", priority)?;
        }
        Ok(())
    }
}
