//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the fields of a person.
//! Each value object validates at construction time, so invalid data
//! cannot be represented in the system.

#[macro_use]
mod macros;

pub mod address;
pub mod course;
pub mod email;
pub mod errors;
pub mod graduation;
pub mod index;
pub mod link;
pub mod name;
pub mod phone;
pub mod priority;
pub mod specialisation;
pub mod tag;
pub mod unique_list;

pub use address::Address;
pub use course::Course;
pub use email::Email;
pub use errors::ValidationError;
pub use graduation::Graduation;
pub use index::Index;
pub use link::Link;
pub use name::Name;
pub use phone::Phone;
pub use priority::{Priority, PriorityLevel};
pub use specialisation::Specialisation;
pub use tag::Tag;
pub use unique_list::UniqueList;
