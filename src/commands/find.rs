//! Ranked person lookup.

use crate::config::Config;
use crate::error::CommandError;
use crate::matching::{MatchResult, PersonMatcher, PersonQuery};
use crate::models::NetworkBook;
use tracing::debug;

/// Finds persons matching a query, best matches first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindCommand {
    query: PersonQuery,
}

impl FindCommand {
    pub fn new(query: PersonQuery) -> Self {
        Self { query }
    }

    pub fn query(&self) -> &PersonQuery {
        &self.query
    }

    /// Run the query against `book`, limited by the configured result
    /// count and confidence threshold.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::NoSearchCriteria` if the query sets no field.
    pub fn execute(
        &self,
        book: &NetworkBook,
        config: &Config,
    ) -> Result<Vec<MatchResult>, CommandError> {
        if self.query.is_empty() {
            return Err(CommandError::NoSearchCriteria);
        }

        let matches = PersonMatcher::new().find_matches(
            &self.query,
            book.persons(),
            config.max_find_results,
            config.find_confidence_threshold,
        );
        debug!(
            "Find query {:?} matched {} of {} persons",
            self.query,
            matches.len(),
            book.len()
        );
        Ok(matches)
    }

    /// Summary line for a list of matches.
    pub fn feedback(matches: &[MatchResult]) -> String {
        format!("{} persons listed!", matches.len())
    }
}
