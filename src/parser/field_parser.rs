//! Field-level parsers.
//!
//! Required fields take `&str`. Optional fields take `Option<&str>` and
//! map an absent input to `Ok(None)`. Collection parsers reject repeated
//! entries before looking at any single entry.

use crate::domain::{
    Address, Course, Email, Graduation, Index, Link, Name, Phone, Priority, Specialisation, Tag,
    UniqueList,
};
use crate::error::{ParseError, ParseResult};
use tracing::debug;

pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";

pub const MESSAGE_PHONE_DUPLICATE: &str = "Your list of phones contains duplicates.\n\
Please ensure that you do not input the same phone more than once.";

pub const MESSAGE_EMAIL_DUPLICATE: &str = "Your list of emails contains duplicates.\n\
Please ensure that you do not input the same email more than once.";

pub const MESSAGE_LINK_DUPLICATE: &str = "Your list of links contains duplicates.\n\
Please ensure that you do not input the same link more than once.";

pub const MESSAGE_TAG_DUPLICATE: &str = "Your list of tags contains duplicates. \n\
Please ensure that you do not input the same tag more than once.";

/// Parse a one-based index.
///
/// # Errors
///
/// Fails with [`MESSAGE_INVALID_INDEX`] unless the trimmed input is a
/// non-zero unsigned integer.
pub fn parse_index(one_based_index: &str) -> ParseResult<Index> {
    let trimmed = one_based_index.trim();
    if !is_non_zero_unsigned_integer(trimmed) {
        return Err(ParseError::new(MESSAGE_INVALID_INDEX));
    }
    let value: usize = trimmed
        .parse()
        .map_err(|_| ParseError::new(MESSAGE_INVALID_INDEX))?;
    Index::from_one_based(value).map_err(|_| ParseError::new(MESSAGE_INVALID_INDEX))
}

/// Returns true if `s` is a positive integer within `i32` range, written
/// with digits only (no sign, no whitespace).
fn is_non_zero_unsigned_integer(s: &str) -> bool {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    s.parse::<i32>().is_ok_and(|value| value > 0)
}

pub fn parse_name(name: &str) -> ParseResult<Name> {
    Ok(Name::new(name.trim())?)
}

pub fn parse_phone(phone: &str) -> ParseResult<Phone> {
    Ok(Phone::new(phone.trim())?)
}

/// Parse a list of phones, keeping input order.
///
/// # Errors
///
/// Fails with [`MESSAGE_PHONE_DUPLICATE`] if any phone appears twice, or
/// with the phone constraint message for the first invalid phone.
pub fn parse_phones<S: AsRef<str>>(phones: &[S]) -> ParseResult<UniqueList<Phone>> {
    parse_unique(phones, MESSAGE_PHONE_DUPLICATE, parse_phone)
}

pub fn parse_email(email: &str) -> ParseResult<Email> {
    Ok(Email::new(email.trim())?)
}

/// Parse a list of emails, keeping input order.
///
/// # Errors
///
/// Fails with [`MESSAGE_EMAIL_DUPLICATE`] if any email appears twice, or
/// with the email constraint message for the first invalid email.
pub fn parse_emails<S: AsRef<str>>(emails: &[S]) -> ParseResult<UniqueList<Email>> {
    parse_unique(emails, MESSAGE_EMAIL_DUPLICATE, parse_email)
}

pub fn parse_link(link: &str) -> ParseResult<Link> {
    Ok(Link::new(link.trim())?)
}

/// Parse a list of links, keeping input order.
pub fn parse_links<S: AsRef<str>>(links: &[S]) -> ParseResult<UniqueList<Link>> {
    parse_unique(links, MESSAGE_LINK_DUPLICATE, parse_link)
}

pub fn parse_address(address: &str) -> ParseResult<Address> {
    Ok(Address::new(address.trim())?)
}

pub fn parse_tag(tag: &str) -> ParseResult<Tag> {
    Ok(Tag::new(tag.trim())?)
}

/// Parse a list of tags, keeping input order.
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> ParseResult<UniqueList<Tag>> {
    parse_unique(tags, MESSAGE_TAG_DUPLICATE, parse_tag)
}

/// Parse an optional graduation semester. Input is upper-cased after trimming.
pub fn parse_graduation(graduation: Option<&str>) -> ParseResult<Option<Graduation>> {
    graduation
        .map(|g| Graduation::new(g.trim().to_uppercase()).map_err(ParseError::from))
        .transpose()
}

pub fn parse_course(course: Option<&str>) -> ParseResult<Option<Course>> {
    course
        .map(|c| Course::new(c.trim()).map_err(ParseError::from))
        .transpose()
}

pub fn parse_specialisation(specialisation: Option<&str>) -> ParseResult<Option<Specialisation>> {
    specialisation
        .map(|s| Specialisation::new(s.trim()).map_err(ParseError::from))
        .transpose()
}

pub fn parse_priority(priority: Option<&str>) -> ParseResult<Option<Priority>> {
    priority
        .map(|p| Priority::new(p.trim()).map_err(ParseError::from))
        .transpose()
}

/// Shared body of the collection parsers: duplicate pass first, then each
/// entry in order.
fn parse_unique<S, T, F>(
    raw: &[S],
    duplicate_message: &str,
    parse_one: F,
) -> ParseResult<UniqueList<T>>
where
    S: AsRef<str>,
    T: PartialEq,
    F: Fn(&str) -> ParseResult<T>,
{
    if !verify_no_duplicates(raw) {
        debug!("Rejecting input list with repeated entries");
        return Err(ParseError::new(duplicate_message));
    }

    let mut result = UniqueList::new();
    for entry in raw {
        result.add(parse_one(entry.as_ref())?);
    }
    Ok(result)
}

/// Pairwise comparison of the trimmed entries.
fn verify_no_duplicates<S: AsRef<str>>(strings: &[S]) -> bool {
    for (i, first) in strings.iter().enumerate() {
        for second in &strings[i + 1..] {
            if first.as_ref().trim() == second.as_ref().trim() {
                return false;
            }
        }
    }
    true
}
