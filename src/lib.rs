//! NetworkBook - validated contact records for managing a personal network.
//!
//! This library turns raw user input into strongly-typed person fields,
//! stores persons in an in-memory network book, and applies partial edits
//! described by an [`EditPersonDescriptor`].
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone, email, link, ...) and `UniqueList`
//! - **parser**: Field parsers from raw strings to value objects
//! - **models**: The `Person` record and the `NetworkBook` collection
//! - **commands**: Edit and find commands
//! - **matching**: Fuzzy and exact person matching
//! - **error**: Custom error types
//! - **config**: Configuration from environment variables
//! - **logging**: Tracing subscriber setup

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod matching;
pub mod models;
pub mod parser;

pub use commands::{CommandResult, EditCommand, EditPersonDescriptor, FindCommand};
pub use config::Config;
pub use domain::{
    Address, Course, Email, Graduation, Index, Link, Name, Phone, Priority, PriorityLevel,
    Specialisation, Tag, UniqueList, ValidationError,
};
pub use error::{CommandError, ConfigError, ParseError};
pub use matching::{MatchResult, MatchType, PersonMatcher, PersonQuery};
pub use models::{NetworkBook, Person};
