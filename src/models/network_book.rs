//! The in-memory collection of persons.

use crate::domain::Index;
use crate::error::CommandError;
use crate::models::Person;
use tracing::debug;

/// Ordered list of persons, holding at most one entry per person.
///
/// Two entries count as the same person when
/// [`Person::is_same_person`] says so, so this is stricter than a plain
/// duplicate check.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NetworkBook {
    persons: Vec<Person>,
}

impl NetworkBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a network book from persons, rejecting repeated persons.
    pub fn from_persons(persons: impl IntoIterator<Item = Person>) -> Result<Self, CommandError> {
        let mut book = Self::new();
        for person in persons {
            book.add_person(person)?;
        }
        Ok(book)
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn len(&self) -> usize {
        self.persons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.persons.is_empty()
    }

    pub fn get(&self, index: Index) -> Option<&Person> {
        self.persons.get(index.zero_based())
    }

    /// Returns true if a person with the same identity is already stored.
    pub fn has_person(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// Append a person.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::DuplicatePerson` if the same person is already stored.
    pub fn add_person(&mut self, person: Person) -> Result<(), CommandError> {
        if self.has_person(&person) {
            return Err(CommandError::DuplicatePerson);
        }
        debug!("Adding person: {}", person.name);
        self.persons.push(person);
        Ok(())
    }

    /// Replace the person at `index` with `edited`.
    ///
    /// # Errors
    ///
    /// - `CommandError::InvalidIndex` if `index` is out of range
    /// - `CommandError::DuplicatePerson` if `edited` is the same person as
    ///   some other entry
    pub fn set_person(&mut self, index: Index, edited: Person) -> Result<(), CommandError> {
        let target = index.zero_based();
        if target >= self.persons.len() {
            return Err(CommandError::InvalidIndex);
        }

        let clashes = self
            .persons
            .iter()
            .enumerate()
            .any(|(i, p)| i != target && p.is_same_person(&edited));
        if clashes {
            return Err(CommandError::DuplicatePerson);
        }

        debug!("Replacing person at index {}: {}", index, edited.name);
        self.persons[target] = edited;
        Ok(())
    }

    /// Remove and return the person at `index`.
    ///
    /// # Errors
    ///
    /// Returns `CommandError::InvalidIndex` if `index` is out of range.
    pub fn remove_person(&mut self, index: Index) -> Result<Person, CommandError> {
        if index.zero_based() >= self.persons.len() {
            return Err(CommandError::InvalidIndex);
        }
        let removed = self.persons.remove(index.zero_based());
        debug!("Removed person: {}", removed.name);
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Course, Name};

    fn person(name: &str) -> Person {
        Person::new(Name::new(name).unwrap())
    }

    #[test]
    fn test_add_person_rejects_same_person() {
        let mut book = NetworkBook::new();
        book.add_person(person("Alice Pauline")).unwrap();

        let mut same = person("Alice Pauline");
        same.course = Some(Course::new("CS2103T").unwrap());
        assert_eq!(book.add_person(same), Err(CommandError::DuplicatePerson));
        assert_eq!(book.len(), 1);
    }

    #[test]
    fn test_set_person() {
        let mut book =
            NetworkBook::from_persons(vec![person("Alice Pauline"), person("Benson Meier")])
                .unwrap();

        // Replacing an entry with an edited version of itself is allowed
        let mut edited = person("Alice Pauline");
        edited.course = Some(Course::new("CS2101").unwrap());
        book.set_person(Index::from_zero_based(0), edited.clone()).unwrap();
        assert_eq!(book.get(Index::from_zero_based(0)), Some(&edited));

        // Renaming into another entry's name clashes
        assert_eq!(
            book.set_person(Index::from_zero_based(0), person("Benson Meier")),
            Err(CommandError::DuplicatePerson)
        );

        assert_eq!(
            book.set_person(Index::from_zero_based(2), person("Carl Kurz")),
            Err(CommandError::InvalidIndex)
        );
    }

    #[test]
    fn test_remove_person() {
        let mut book = NetworkBook::from_persons(vec![person("Alice Pauline")]).unwrap();
        assert_eq!(
            book.remove_person(Index::from_zero_based(1)),
            Err(CommandError::InvalidIndex)
        );
        let removed = book.remove_person(Index::from_zero_based(0)).unwrap();
        assert_eq!(removed.name.as_str(), "Alice Pauline");
        assert!(book.is_empty());
    }

    #[test]
    fn test_from_persons_rejects_duplicates() {
        let result = NetworkBook::from_persons(vec![person("Alice"), person("Alice")]);
        assert_eq!(result, Err(CommandError::DuplicatePerson));
    }
}
