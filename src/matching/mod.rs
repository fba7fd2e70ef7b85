//! Matching utilities for finding persons.
//!
//! This module provides fuzzy name matching and exact matching on emails,
//! phone numbers and links.

pub mod fuzzy_matcher;

pub use fuzzy_matcher::{MatchResult, MatchType, PersonMatcher, PersonQuery};
