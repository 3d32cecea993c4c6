//! Append-only, insertion-ordered record storage.
//!
//! [`AnimalStore`] is plain data with no interior locking. Callers that share
//! it across tasks must hold it behind a lock.

use crate::animal::Animal;

/// Ordered collection of records. Names are not unique.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnimalStore {
    animals: Vec<Animal>,
}

impl AnimalStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The store every process starts with.
    pub fn seeded() -> Self {
        AnimalStore {
            animals: vec![
                Animal::dog("Rey"),
                Animal::cat("Mitzi"),
                Animal::dog("Nala"),
                Animal::cat("Mutzi"),
                Animal::dog("Shendy"),
            ],
        }
    }

    /// All records, oldest first.
    pub fn list(&self) -> &[Animal] {
        &self.animals
    }

    pub fn append(&mut self, animal: Animal) {
        self.animals.push(animal);
    }

    /// First record whose name matches exactly (byte-wise, case-sensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Animal> {
        self.animals.iter().find(|a| a.name() == name)
    }

    pub fn len(&self) -> usize {
        self.animals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_store_order() {
        let store = AnimalStore::seeded();
        let names: Vec<&str> = store.list().iter().map(Animal::name).collect();
        assert_eq!(names, ["Rey", "Mitzi", "Nala", "Mutzi", "Shendy"]);
        assert_eq!(store.list()[0], Animal::dog("Rey"));
        assert_eq!(store.list()[3], Animal::cat("Mutzi"));
    }

    #[test]
    fn new_store_is_empty() {
        let store = AnimalStore::new();
        assert!(store.is_empty());
        assert!(store.list().is_empty());
        assert_eq!(store.find_by_name("Rey"), None);
    }

    #[test]
    fn append_goes_to_the_end() {
        let mut store = AnimalStore::seeded();
        store.append(Animal::cat("Tom"));
        assert_eq!(store.len(), 6);
        assert_eq!(store.list().last(), Some(&Animal::cat("Tom")));
    }

    #[test]
    fn find_by_name_is_exact() {
        let store = AnimalStore::seeded();
        assert_eq!(store.find_by_name("Nala"), Some(&Animal::dog("Nala")));
        assert_eq!(store.find_by_name("nala"), None);
        assert_eq!(store.find_by_name("Nal"), None);
        assert_eq!(store.find_by_name("Ghost"), None);
    }

    #[test]
    fn find_by_name_returns_first_duplicate() {
        let mut store = AnimalStore::seeded();
        store.append(Animal::cat("Rey"));
        assert_eq!(store.find_by_name("Rey"), Some(&Animal::dog("Rey")));
        assert_eq!(store.list().iter().filter(|a| a.name() == "Rey").count(), 2);
    }
}
