//! Commands that act on the network book.
//!
//! - **Edit**: apply an [`EditPersonDescriptor`] to the person at an index
//! - **Find**: ranked lookup of persons by name, email, phone or link

pub mod edit;
pub mod find;

pub use edit::{EditCommand, EditPersonDescriptor};
pub use find::FindCommand;

/// Outcome of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message to show the user
    pub feedback: String,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
        }
    }
}
