//! Person nodes of the organization tree

use serde::Serialize;
use std::fmt;

use super::record::Record;

/// Index of a [`Person`] inside its [`Hierarchy`](crate::hierarchy::Hierarchy)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PersonId(pub(crate) usize);

impl PersonId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: u64,
    /// Manager id as written in the input, kept even when it did not resolve
    pub manager_id: Option<String>,
    pub(crate) manager: Option<PersonId>,
    pub(crate) reports: Vec<PersonId>,
}

impl Person {
    pub(crate) fn from_record(record: Record) -> Self {
        Self {
            id: record.id,
            first_name: record.first_name,
            last_name: record.last_name,
            salary: record.salary,
            manager_id: record.manager_id,
            manager: None,
            reports: Vec::new(),
        }
    }

    /// Resolved manager, `None` for the CEO and for dangling references
    pub fn manager(&self) -> Option<PersonId> {
        self.manager
    }

    /// Direct reports in input order
    pub fn reports(&self) -> &[PersonId] {
        &self.reports
    }

    pub fn is_manager(&self) -> bool {
        !self.reports.is_empty()
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} (ID: {})", self.first_name, self.last_name, self.id)
    }
}
