//! Organization Hierarchy
//!
//! An arena of [`Person`]s in input order, an id index over it, and the
//! designated CEO. Manager and report links are arena indices, so the tree
//! holds no reference cycles and is immutable once built.

mod builder;

pub use builder::HierarchyBuilder;

use std::collections::HashMap;

use crate::model::{Person, PersonId};

#[derive(Debug, Clone, Default)]
pub struct Hierarchy {
    people: Vec<Person>,
    index: HashMap<String, PersonId>,
    root: Option<PersonId>,
}

impl Hierarchy {
    /// Look up a person by employee id
    pub fn get(&self, id: &str) -> Option<&Person> {
        self.index.get(id).map(|&pid| self.person(pid))
    }

    pub fn id_of(&self, id: &str) -> Option<PersonId> {
        self.index.get(id).copied()
    }

    /// Panics if `pid` did not come from this hierarchy
    pub fn person(&self, pid: PersonId) -> &Person {
        &self.people[pid.0]
    }

    pub fn root(&self) -> Option<PersonId> {
        self.root
    }

    pub fn ceo(&self) -> Option<&Person> {
        self.root.map(|pid| self.person(pid))
    }

    pub fn manager_of(&self, person: &Person) -> Option<&Person> {
        person.manager().map(|pid| self.person(pid))
    }

    pub fn reports_of<'a>(&'a self, person: &'a Person) -> impl Iterator<Item = &'a Person> + 'a {
        person.reports().iter().map(move |&pid| self.person(pid))
    }

    /// All people in input order
    pub fn iter(&self) -> impl Iterator<Item = (PersonId, &Person)> {
        self.people
            .iter()
            .enumerate()
            .map(|(idx, person)| (PersonId(idx), person))
    }

    pub fn len(&self) -> usize {
        self.people.len()
    }

    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }
}
