//! Data models for the network book.

pub mod network_book;
pub mod person;

pub use network_book::NetworkBook;
pub use person::Person;
