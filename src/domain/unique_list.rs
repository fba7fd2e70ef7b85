//! Ordered, duplicate-free list.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A list that keeps insertion order and never holds two equal elements.
///
/// Collections coming from user input are checked for duplicates by the
/// parser before a `UniqueList` is built, so callers get a field-specific
/// message; the list itself simply refuses repeated elements.
///
/// # Example
///
/// ```
/// use networkbook::domain::UniqueList;
///
/// let mut list = UniqueList::new();
/// assert!(list.add("a"));
/// assert!(!list.add("a"));
/// assert_eq!(list.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T: PartialEq> UniqueList<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `item` unless an equal element is already present.
    ///
    /// Returns whether the item was added.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.items.push(item);
        true
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }

    /// Remove the element equal to `item`, returning whether one was found.
    pub fn remove(&mut self, item: &T) -> bool {
        match self.items.iter().position(|existing| existing == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }
}

impl<T: PartialEq> Default for UniqueList<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Collecting drops later repeats of an element.
impl<T: PartialEq> FromIterator<T> for UniqueList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        for item in iter {
            list.add(item);
        }
        list
    }
}

impl<T> IntoIterator for UniqueList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a UniqueList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T: Serialize> Serialize for UniqueList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.items.serialize(serializer)
    }
}

// Deserialize from an array, rejecting repeated elements
impl<'de, T> Deserialize<'de> for UniqueList<T>
where
    T: Deserialize<'de> + PartialEq,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let items: Vec<T> = Vec::deserialize(deserializer)?;
        let mut list = Self::new();
        for item in items {
            if !list.add(item) {
                return Err(serde::de::Error::custom("list contains duplicate elements"));
            }
        }
        Ok(list)
    }
}

/// Renders as `[a, b, c]`.
impl<T: fmt::Display> fmt::Display for UniqueList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "]")
    }
}
