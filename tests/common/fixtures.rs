//! Sample values, descriptors and persons.

#![allow(dead_code)]

use super::builders::{EditPersonDescriptorBuilder, PersonBuilder};
use networkbook::{EditPersonDescriptor, NetworkBook, Person};

pub const VALID_NAME_AMY: &str = "Amy Bee";
pub const VALID_NAME_BOB: &str = "Bob Choo";
pub const VALID_PHONE_AMY: &str = "11111111";
pub const VALID_PHONE_BOB: &str = "22222222";
pub const VALID_EMAIL_AMY: &str = "amy@example.com";
pub const VALID_EMAIL_BOB: &str = "bob@example.com";
pub const VALID_LINK_AMY: &str = "github.com/amybee";
pub const VALID_LINK_BOB: &str = "https://www.linkedin.com/in/bob-choo";
pub const VALID_ADDRESS_AMY: &str = "Block 312, Amy Street 1";
pub const VALID_ADDRESS_BOB: &str = "Block 123, Bobby Street 3";
pub const VALID_GRADUATION_AMY: &str = "AY2324-S1";
pub const VALID_GRADUATION_BOB: &str = "AY2526-S2";
pub const VALID_COURSE_AMY: &str = "CS2103T";
pub const VALID_COURSE_BOB: &str = "CS2101";
pub const VALID_SPECIALISATION_AMY: &str = "Software Engineering";
pub const VALID_SPECIALISATION_BOB: &str = "Artificial Intelligence";
pub const VALID_TAG_HUSBAND: &str = "husband";
pub const VALID_TAG_FRIEND: &str = "friend";
pub const VALID_PRIORITY_AMY: &str = "high";
pub const VALID_PRIORITY_BOB: &str = "low";

pub fn desc_amy() -> EditPersonDescriptor {
    EditPersonDescriptorBuilder::new()
        .with_name(VALID_NAME_AMY)
        .with_phone(VALID_PHONE_AMY)
        .with_email(VALID_EMAIL_AMY)
        .with_links(&[VALID_LINK_AMY])
        .with_address(VALID_ADDRESS_AMY)
        .with_graduation(VALID_GRADUATION_AMY)
        .with_course(VALID_COURSE_AMY)
        .with_specialisation(VALID_SPECIALISATION_AMY)
        .with_tags(&[VALID_TAG_FRIEND])
        .with_priority(VALID_PRIORITY_AMY)
        .build()
}

pub fn desc_bob() -> EditPersonDescriptor {
    EditPersonDescriptorBuilder::new()
        .with_name(VALID_NAME_BOB)
        .with_phone(VALID_PHONE_BOB)
        .with_email(VALID_EMAIL_BOB)
        .with_links(&[VALID_LINK_BOB])
        .with_address(VALID_ADDRESS_BOB)
        .with_graduation(VALID_GRADUATION_BOB)
        .with_course(VALID_COURSE_BOB)
        .with_specialisation(VALID_SPECIALISATION_BOB)
        .with_tags(&[VALID_TAG_HUSBAND, VALID_TAG_FRIEND])
        .with_priority(VALID_PRIORITY_BOB)
        .build()
}

pub fn alice() -> Person {
    PersonBuilder::new("Alice Pauline")
        .with_phones(&["94351253"])
        .with_emails(&["alice@example.com"])
        .with_links(&["github.com/alicepauline"])
        .with_address("123, Jurong West Ave 6, #08-111")
        .with_course("CS2103T")
        .with_tags(&["friends"])
        .with_priority("high")
        .build()
}

pub fn benson() -> Person {
    PersonBuilder::new("Benson Meier")
        .with_phones(&["98765432"])
        .with_emails(&["johnd@example.com", "benson@work.com"])
        .with_address("311, Clementi Ave 2, #02-25")
        .with_graduation("AY2425-S2")
        .with_tags(&["owesMoney", "friends"])
        .build()
}

pub fn carl() -> Person {
    PersonBuilder::new("Carl Kurz")
        .with_phones(&["95352563"])
        .with_emails(&["heinz@example.com"])
        .with_specialisation("Data Science")
        .build()
}

pub fn daniel() -> Person {
    PersonBuilder::new("Daniel Meier")
        .with_phones(&["87652533"])
        .with_emails(&["cornelia@example.com"])
        .with_links(&["https://danielmeier.dev/"])
        .with_priority("m")
        .build()
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl(), daniel()]
}

pub fn typical_network_book() -> NetworkBook {
    NetworkBook::from_persons(typical_persons()).unwrap()
}
