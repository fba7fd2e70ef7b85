//! Fuzzy matching implementation for person lookup.
//!
//! This module provides person matching with:
//! - Exact matching on email, phone and link
//! - Fuzzy name matching (substring and Levenshtein based)
//! - Confidence scoring (0-100 scale)

use crate::models::Person;

/// A match result containing a person and its confidence score.
#[derive(Debug, Clone, PartialEq)]
pub struct MatchResult {
    /// The matched person
    pub person: Person,

    /// Confidence score (0-100, where 100 is an exact match)
    pub confidence: u8,

    /// Type of match that produced this result
    pub match_type: MatchType,
}

/// The type of match that was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact email match
    ExactEmail,

    /// Exact phone match
    ExactPhone,

    /// Exact link match
    ExactLink,

    /// Fuzzy name match
    FuzzyName,
}

/// Search criteria for person matching. Unset fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonQuery {
    /// Name to search for
    pub name: Option<String>,

    /// Email to search for
    pub email: Option<String>,

    /// Phone number to search for
    pub phone: Option<String>,

    /// Link to search for
    pub link: Option<String>,
}

impl PersonQuery {
    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.phone.is_none() && self.link.is_none()
    }
}

/// Person matcher with fuzzy and exact matching capabilities.
#[derive(Debug, Default)]
pub struct PersonMatcher;

impl PersonMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Find matching persons based on the query.
    ///
    /// # Arguments
    /// * `query` - Search criteria
    /// * `persons` - Persons to search through
    /// * `max_results` - Maximum number of results to return
    /// * `min_confidence` - Minimum confidence threshold for fuzzy matches (0-100)
    ///
    /// # Returns
    /// Match results sorted by confidence (highest first), then by name
    pub fn find_matches(
        &self,
        query: &PersonQuery,
        persons: &[Person],
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<MatchResult> {
        let mut results: Vec<MatchResult> = Vec::new();

        for person in persons {
            // Exact matches take priority over fuzzy ones
            if let Some(email) = &query.email {
                if let Some(confidence) = self.match_email(email, person) {
                    results.push(MatchResult {
                        person: person.clone(),
                        confidence,
                        match_type: MatchType::ExactEmail,
                    });
                    continue;
                }
            }

            if let Some(phone) = &query.phone {
                if let Some(confidence) = self.match_phone(phone, person) {
                    results.push(MatchResult {
                        person: person.clone(),
                        confidence,
                        match_type: MatchType::ExactPhone,
                    });
                    continue;
                }
            }

            if let Some(link) = &query.link {
                if let Some(confidence) = self.match_link(link, person) {
                    results.push(MatchResult {
                        person: person.clone(),
                        confidence,
                        match_type: MatchType::ExactLink,
                    });
                    continue;
                }
            }

            if let Some(name) = &query.name {
                if let Some(confidence) = self.fuzzy_match_name(name, person.name.as_str()) {
                    if confidence >= min_confidence {
                        results.push(MatchResult {
                            person: person.clone(),
                            confidence,
                            match_type: MatchType::FuzzyName,
                        });
                    }
                }
            }
        }

        results.sort_by(|a, b| {
            b.confidence
                .cmp(&a.confidence)
                .then_with(|| a.person.name.cmp(&b.person.name))
        });
        results.truncate(max_results);

        results
    }

    /// Returns 100 if any of the person's emails equals the query, ignoring case.
    fn match_email(&self, query_email: &str, person: &Person) -> Option<u8> {
        let normalized_query = Self::normalize_email(query_email);
        person
            .emails
            .iter()
            .any(|email| Self::normalize_email(email.as_str()) == normalized_query)
            .then_some(100)
    }

    /// Returns 100 if any of the person's phones has the query's digits.
    fn match_phone(&self, query_phone: &str, person: &Person) -> Option<u8> {
        let normalized_query = Self::normalize_phone(query_phone);
        if normalized_query.is_empty() {
            return None;
        }
        person
            .phones
            .iter()
            .any(|phone| Self::normalize_phone(phone.as_str()) == normalized_query)
            .then_some(100)
    }

    /// Returns 100 if any of the person's links points at the query URL.
    fn match_link(&self, query_link: &str, person: &Person) -> Option<u8> {
        let normalized_query = Self::normalize_url(query_link);
        person
            .links
            .iter()
            .any(|link| Self::normalize_url(link.as_str()) == normalized_query)
            .then_some(100)
    }

    /// Fuzzy match a name, returning a confidence score if it matched at all.
    fn fuzzy_match_name(&self, query: &str, person_name: &str) -> Option<u8> {
        let query_normalized = Self::normalize_name(query);
        let name_normalized = Self::normalize_name(person_name);

        let score = Self::calculate_fuzzy_score(&query_normalized, &name_normalized);
        (score > 0).then_some(score)
    }

    /// Score from 0-95 using substring checks and Levenshtein distance.
    /// 100 is reserved for exact email/phone/link matches.
    fn calculate_fuzzy_score(query: &str, target: &str) -> u8 {
        if query.is_empty() || target.is_empty() {
            return 0;
        }

        if query == target {
            return 95;
        }

        if target.contains(query) {
            let ratio = query.len() as f64 / target.len() as f64;
            return (85.0 * ratio + 10.0) as u8;
        }

        if query.contains(target) {
            return 85;
        }

        let distance = Self::levenshtein_distance(query, target);
        let max_len = query.chars().count().max(target.chars().count());

        // Too many differences
        if distance as f64 / max_len as f64 > 0.5 {
            return 0;
        }

        let similarity = 1.0 - (distance as f64 / max_len as f64);
        (similarity * 85.0) as u8
    }

    /// Calculate Levenshtein distance between two strings.
    fn levenshtein_distance(s1: &str, s2: &str) -> usize {
        let s1_chars: Vec<char> = s1.chars().collect();
        let s2_chars: Vec<char> = s2.chars().collect();

        if s1_chars.is_empty() {
            return s2_chars.len();
        }
        if s2_chars.is_empty() {
            return s1_chars.len();
        }

        // Single rolling row instead of the full matrix
        let mut previous: Vec<usize> = (0..=s2_chars.len()).collect();
        let mut current = vec![0; s2_chars.len() + 1];

        for (i, c1) in s1_chars.iter().enumerate() {
            current[0] = i + 1;
            for (j, c2) in s2_chars.iter().enumerate() {
                let cost = usize::from(c1 != c2);
                current[j + 1] = (previous[j + 1] + 1)
                    .min(current[j] + 1)
                    .min(previous[j] + cost);
            }
            std::mem::swap(&mut previous, &mut current);
        }

        previous[s2_chars.len()]
    }

    // ==================== Normalization Functions ====================

    /// Lowercase and trim an email address.
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Keep only the digits of a phone number.
    pub fn normalize_phone(phone: &str) -> String {
        phone.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    /// Lowercase a URL and strip scheme, `www.` and trailing slashes.
    pub fn normalize_url(url: &str) -> String {
        url.trim()
            .to_lowercase()
            .trim_start_matches("https://")
            .trim_start_matches("http://")
            .trim_start_matches("www.")
            .trim_end_matches('/')
            .to_string()
    }

    /// Lowercase a name and collapse whitespace.
    pub fn normalize_name(name: &str) -> String {
        name.split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase()
    }
}
