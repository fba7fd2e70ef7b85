//! Parsing of raw user input into validated domain values.
//!
//! Every function trims its input, validates it and returns the matching
//! value object, or a [`ParseError`](crate::error::ParseError) whose
//! message can be shown to the user as-is.

pub mod field_parser;

pub use field_parser::{
    parse_address, parse_course, parse_email, parse_emails, parse_graduation, parse_index,
    parse_link, parse_links, parse_name, parse_phone, parse_phones, parse_priority,
    parse_specialisation, parse_tag, parse_tags, MESSAGE_EMAIL_DUPLICATE, MESSAGE_INVALID_INDEX,
    MESSAGE_LINK_DUPLICATE, MESSAGE_PHONE_DUPLICATE, MESSAGE_TAG_DUPLICATE,
};
