//! Persisted People List
//!
//! In-memory list mirrored to one storage slot after every change.

use crate::models::Person;
use crate::platform::{load_json, save_json, KeyValueStore};

/// Built-in list used when storage is empty and on reset
pub fn default_people() -> Vec<Person> {
    vec![
        Person::new(1, "john"),
        Person::new(2, "peter"),
        Person::new(3, "susan"),
        Person::new(4, "anna"),
        Person::new(5, "bill"),
    ]
}

/// People list with write-through persistence
#[derive(Debug, Clone)]
pub struct PeopleList<S> {
    people: Vec<Person>,
    store: S,
    slot: String,
}

impl<S: KeyValueStore> PeopleList<S> {
    /// Load from `slot`, falling back to [`default_people`].
    /// The loaded list is written back immediately.
    pub fn load(store: S, slot: impl Into<String>) -> Self {
        let slot = slot.into();
        let people = match load_json::<Vec<Person>>(&store, &slot) {
            Some(saved) => {
                log::debug!("[people] restored {} people from '{}'", saved.len(), slot);
                saved
            }
            None => default_people(),
        };
        let list = Self { people, store, slot };
        list.persist();
        list
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    /// Drop the person with `id`; unknown ids leave the list as is
    pub fn remove(&mut self, id: u32) {
        self.people.retain(|person| person.id != id);
        self.persist();
    }

    pub fn clear(&mut self) {
        self.people.clear();
        self.persist();
    }

    /// Restore the built-in list (storage is not re-read)
    pub fn reset_to_default(&mut self) {
        self.people = default_people();
        self.persist();
    }

    fn persist(&self) {
        if let Err(e) = save_json(&self.store, &self.slot, &self.people) {
            log::warn!("[people] failed to save '{}': {}", self.slot, e);
        }
    }
}
