//! Builders that assemble test data from raw strings through the parsers.

#![allow(dead_code)]

use networkbook::parser;
use networkbook::{EditPersonDescriptor, Name, Person};

/// Builds an [`EditPersonDescriptor`] from raw field values.
///
/// Panics on invalid input, which is what tests want.
#[derive(Debug, Clone, Default)]
pub struct EditPersonDescriptorBuilder {
    descriptor: EditPersonDescriptor,
}

impl EditPersonDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a copy of an existing descriptor.
    pub fn from_descriptor(descriptor: &EditPersonDescriptor) -> Self {
        Self {
            descriptor: descriptor.clone(),
        }
    }

    /// Start from a descriptor that sets every field of `person`.
    pub fn from_person(person: &Person) -> Self {
        let mut descriptor = EditPersonDescriptor::new();
        descriptor.set_name(person.name.clone());
        descriptor.set_phones(person.phones.clone());
        descriptor.set_emails(person.emails.clone());
        descriptor.set_links(person.links.clone());
        if let Some(ref address) = person.address {
            descriptor.set_address(address.clone());
        }
        if let Some(ref graduation) = person.graduation {
            descriptor.set_graduation(graduation.clone());
        }
        if let Some(ref course) = person.course {
            descriptor.set_course(course.clone());
        }
        if let Some(ref specialisation) = person.specialisation {
            descriptor.set_specialisation(specialisation.clone());
        }
        descriptor.set_tags(person.tags.clone());
        if let Some(priority) = person.priority {
            descriptor.set_priority(priority);
        }
        Self { descriptor }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.descriptor.set_name(parser::parse_name(name).unwrap());
        self
    }

    pub fn with_phone(self, phone: &str) -> Self {
        self.with_phones(&[phone])
    }

    pub fn with_phones(mut self, phones: &[&str]) -> Self {
        self.descriptor.set_phones(parser::parse_phones(phones).unwrap());
        self
    }

    pub fn with_email(self, email: &str) -> Self {
        self.with_emails(&[email])
    }

    pub fn with_emails(mut self, emails: &[&str]) -> Self {
        self.descriptor.set_emails(parser::parse_emails(emails).unwrap());
        self
    }

    pub fn with_links(mut self, links: &[&str]) -> Self {
        self.descriptor.set_links(parser::parse_links(links).unwrap());
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.descriptor
            .set_address(parser::parse_address(address).unwrap());
        self
    }

    pub fn with_graduation(mut self, graduation: &str) -> Self {
        let graduation = parser::parse_graduation(Some(graduation)).unwrap().unwrap();
        self.descriptor.set_graduation(graduation);
        self
    }

    pub fn with_course(mut self, course: &str) -> Self {
        let course = parser::parse_course(Some(course)).unwrap().unwrap();
        self.descriptor.set_course(course);
        self
    }

    pub fn with_specialisation(mut self, specialisation: &str) -> Self {
        let specialisation = parser::parse_specialisation(Some(specialisation))
            .unwrap()
            .unwrap();
        self.descriptor.set_specialisation(specialisation);
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.descriptor.set_tags(parser::parse_tags(tags).unwrap());
        self
    }

    pub fn with_priority(mut self, priority: &str) -> Self {
        let priority = parser::parse_priority(Some(priority)).unwrap().unwrap();
        self.descriptor.set_priority(priority);
        self
    }

    pub fn build(self) -> EditPersonDescriptor {
        self.descriptor
    }
}

/// Builds a [`Person`] from raw field values.
#[derive(Debug, Clone)]
pub struct PersonBuilder {
    person: Person,
}

impl PersonBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            person: Person::new(Name::new(name).unwrap()),
        }
    }

    /// Start from a copy of an existing person.
    pub fn from_person(person: &Person) -> Self {
        Self {
            person: person.clone(),
        }
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.person.name = parser::parse_name(name).unwrap();
        self
    }

    pub fn with_phones(mut self, phones: &[&str]) -> Self {
        self.person.phones = parser::parse_phones(phones).unwrap();
        self
    }

    pub fn with_emails(mut self, emails: &[&str]) -> Self {
        self.person.emails = parser::parse_emails(emails).unwrap();
        self
    }

    pub fn with_links(mut self, links: &[&str]) -> Self {
        self.person.links = parser::parse_links(links).unwrap();
        self
    }

    pub fn with_address(mut self, address: &str) -> Self {
        self.person.address = Some(parser::parse_address(address).unwrap());
        self
    }

    pub fn with_graduation(mut self, graduation: &str) -> Self {
        self.person.graduation = parser::parse_graduation(Some(graduation)).unwrap();
        self
    }

    pub fn with_course(mut self, course: &str) -> Self {
        self.person.course = parser::parse_course(Some(course)).unwrap();
        self
    }

    pub fn with_specialisation(mut self, specialisation: &str) -> Self {
        self.person.specialisation = parser::parse_specialisation(Some(specialisation)).unwrap();
        self
    }

    pub fn with_tags(mut self, tags: &[&str]) -> Self {
        self.person.tags = parser::parse_tags(tags).unwrap();
        self
    }

    pub fn with_priority(mut self, priority: &str) -> Self {
        self.person.priority = parser::parse_priority(Some(priority)).unwrap();
        self
    }

    pub fn build(self) -> Person {
        self.person
    }
}
