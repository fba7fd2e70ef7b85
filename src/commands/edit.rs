//! Partial edits of a person.

use super::CommandResult;
use crate::domain::{
    Address, Course, Email, Graduation, Index, Link, Name, Phone, Priority, Specialisation, Tag,
    UniqueList,
};
use crate::error::CommandError;
use crate::models::{NetworkBook, Person};
use std::fmt;
use tracing::{debug, info};

/// Placeholder rendered for a field the descriptor leaves unchanged.
pub const ABSENT_FIELD: &str = "<none>";

/// The fields to change on a person. Unset fields keep their current value.
///
/// Equality is structural over every field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditPersonDescriptor {
    name: Option<Name>,
    phones: Option<UniqueList<Phone>>,
    emails: Option<UniqueList<Email>>,
    links: Option<UniqueList<Link>>,
    address: Option<Address>,
    graduation: Option<Graduation>,
    course: Option<Course>,
    specialisation: Option<Specialisation>,
    tags: Option<UniqueList<Tag>>,
    priority: Option<Priority>,
}

impl EditPersonDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phones.is_some()
            || self.emails.is_some()
            || self.links.is_some()
            || self.address.is_some()
            || self.graduation.is_some()
            || self.course.is_some()
            || self.specialisation.is_some()
            || self.tags.is_some()
            || self.priority.is_some()
    }

    /// Build the edited version of `person`: set fields replace, unset
    /// fields are copied over.
    pub fn apply_to(&self, person: &Person) -> Person {
        Person {
            name: self.name.clone().unwrap_or_else(|| person.name.clone()),
            phones: self.phones.clone().unwrap_or_else(|| person.phones.clone()),
            emails: self.emails.clone().unwrap_or_else(|| person.emails.clone()),
            links: self.links.clone().unwrap_or_else(|| person.links.clone()),
            address: self.address.clone().or_else(|| person.address.clone()),
            graduation: self.graduation.clone().or_else(|| person.graduation.clone()),
            course: self.course.clone().or_else(|| person.course.clone()),
            specialisation: self
                .specialisation
                .clone()
                .or_else(|| person.specialisation.clone()),
            tags: self.tags.clone().unwrap_or_else(|| person.tags.clone()),
            priority: self.priority.or(person.priority),
        }
    }

    pub fn name(&self) -> Option<&Name> {
        self.name.as_ref()
    }

    pub fn set_name(&mut self, name: Name) {
        self.name = Some(name);
    }

    pub fn phones(&self) -> Option<&UniqueList<Phone>> {
        self.phones.as_ref()
    }

    pub fn set_phones(&mut self, phones: UniqueList<Phone>) {
        self.phones = Some(phones);
    }

    pub fn emails(&self) -> Option<&UniqueList<Email>> {
        self.emails.as_ref()
    }

    pub fn set_emails(&mut self, emails: UniqueList<Email>) {
        self.emails = Some(emails);
    }

    pub fn links(&self) -> Option<&UniqueList<Link>> {
        self.links.as_ref()
    }

    pub fn set_links(&mut self, links: UniqueList<Link>) {
        self.links = Some(links);
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn set_address(&mut self, address: Address) {
        self.address = Some(address);
    }

    pub fn graduation(&self) -> Option<&Graduation> {
        self.graduation.as_ref()
    }

    pub fn set_graduation(&mut self, graduation: Graduation) {
        self.graduation = Some(graduation);
    }

    pub fn course(&self) -> Option<&Course> {
        self.course.as_ref()
    }

    pub fn set_course(&mut self, course: Course) {
        self.course = Some(course);
    }

    pub fn specialisation(&self) -> Option<&Specialisation> {
        self.specialisation.as_ref()
    }

    pub fn set_specialisation(&mut self, specialisation: Specialisation) {
        self.specialisation = Some(specialisation);
    }

    pub fn tags(&self) -> Option<&UniqueList<Tag>> {
        self.tags.as_ref()
    }

    pub fn set_tags(&mut self, tags: UniqueList<Tag>) {
        self.tags = Some(tags);
    }

    pub fn priority(&self) -> Option<&Priority> {
        self.priority.as_ref()
    }

    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = Some(priority);
    }
}

/// Writes `name=value`, or `name=<none>` when the value is absent.
fn write_field<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    value: Option<&T>,
) -> fmt::Result {
    match value {
        Some(value) => write!(f, "{}={}", name, value),
        None => write!(f, "{}={}", name, ABSENT_FIELD),
    }
}

impl fmt::Display for EditPersonDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EditPersonDescriptor{{")?;
        write_field(f, "name", self.name())?;
        write!(f, ", ")?;
        write_field(f, "phones", self.phones())?;
        write!(f, ", ")?;
        write_field(f, "emails", self.emails())?;
        write!(f, ", ")?;
        write_field(f, "links", self.links())?;
        write!(f, ", ")?;
        write_field(f, "address", self.address())?;
        write!(f, ", ")?;
        write_field(f, "graduation", self.graduation())?;
        write!(f, ", ")?;
        write_field(f, "course", self.course())?;
        write!(f, ", ")?;
        write_field(f, "specialisation", self.specialisation())?;
        write!(f, ", ")?;
        write_field(f, "tags", self.tags())?;
        write!(f, ", ")?;
        write_field(f, "priority", self.priority())?;
        write!(f, "}}")
    }
}

/// Edits the details of the person at `index`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditCommand {
    index: Index,
    descriptor: EditPersonDescriptor,
}

impl EditCommand {
    pub const MESSAGE_EDIT_PERSON_SUCCESS: &'static str = "Edited Person: ";

    pub fn new(index: Index, descriptor: EditPersonDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditPersonDescriptor {
        &self.descriptor
    }

    /// Apply the edit to `book`.
    ///
    /// # Errors
    ///
    /// - `CommandError::NotEdited` if the descriptor sets no field
    /// - `CommandError::InvalidIndex` if no person is at the index
    /// - `CommandError::DuplicatePerson` if the edit would clash with
    ///   another person
    pub fn execute(&self, book: &mut NetworkBook) -> Result<CommandResult, CommandError> {
        if !self.descriptor.is_any_field_edited() {
            return Err(CommandError::NotEdited);
        }

        let person = book.get(self.index).ok_or(CommandError::InvalidIndex)?;
        debug!("Applying {} to person {}", self.descriptor, self.index);

        let edited = self.descriptor.apply_to(person);
        book.set_person(self.index, edited.clone())?;

        info!("Edited person at index {}", self.index);
        Ok(CommandResult::new(format!(
            "{}{}",
            Self::MESSAGE_EDIT_PERSON_SUCCESS,
            edited
        )))
    }
}

impl fmt::Display for EditCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EditCommand{{index={}, editPersonDescriptor={}}}",
            self.index, self.descriptor
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_descriptor() {
        let descriptor = EditPersonDescriptor::new();
        assert!(!descriptor.is_any_field_edited());
        assert!(descriptor.name().is_none());
        assert!(descriptor.tags().is_none());
    }

    #[test]
    fn test_setters_mark_fields_edited() {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_priority(Priority::new("low").unwrap());
        assert!(descriptor.is_any_field_edited());
        assert_eq!(descriptor.priority().map(|p| p.to_string()), Some("low".to_string()));

        // An empty list is still an edit: it clears the field
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_tags(UniqueList::new());
        assert!(descriptor.is_any_field_edited());
    }

    #[test]
    fn test_apply_to_keeps_unset_fields() {
        let mut person = Person::new(Name::new("Amy Bee").unwrap());
        person.phones.add(Phone::new("11111111").unwrap());
        person.course = Some(Course::new("CS2103T").unwrap());

        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_name(Name::new("Amy Tan").unwrap());
        descriptor.set_tags([Tag::new("friend").unwrap()].into_iter().collect());

        let edited = descriptor.apply_to(&person);
        assert_eq!(edited.name.as_str(), "Amy Tan");
        assert_eq!(edited.phones, person.phones);
        assert_eq!(edited.course, person.course);
        assert_eq!(edited.tags.to_string(), "[friend]");
    }

    #[test]
    fn test_display_with_fields() {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_name(Name::new("Amy Bee").unwrap());
        descriptor.set_emails(
            [Email::new("amy@example.com").unwrap(), Email::new("amy@work.com").unwrap()]
                .into_iter()
                .collect(),
        );
        assert_eq!(
            descriptor.to_string(),
            "EditPersonDescriptor{name=Amy Bee, phones=<none>, \
emails=[amy@example.com, amy@work.com], links=<none>, address=<none>, graduation=<none>, \
course=<none>, specialisation=<none>, tags=<none>, priority=<none>}"
        );
    }
}
