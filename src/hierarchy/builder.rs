//! Hierarchy construction from unordered records

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use tracing::{debug, info};

use super::Hierarchy;
use crate::context::{AuditContext, BuildWarning};
use crate::error::{OrgError, Result};
use crate::model::{Person, PersonId, Record};

/// Builds a [`Hierarchy`] in two passes: create every person, then link
/// each one to its manager. Warnings go to the borrowed context.
pub struct HierarchyBuilder<'a> {
    ctx: &'a mut AuditContext,
}

impl<'a> HierarchyBuilder<'a> {
    pub fn new(ctx: &'a mut AuditContext) -> Self {
        Self { ctx }
    }

    pub fn build(self, records: Vec<Record>) -> Result<Hierarchy> {
        let ctx = self.ctx;
        let mut people: Vec<Person> = Vec::with_capacity(records.len());
        let mut index: HashMap<String, PersonId> = HashMap::with_capacity(records.len());
        let mut root: Option<PersonId> = None;

        for record in records {
            let pid = PersonId(people.len());
            match index.entry(record.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(OrgError::DuplicateId {
                        id: record.id,
                        line: record.line,
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(pid);
                }
            }

            if record.manager_id.is_none() {
                match root {
                    None => root = Some(pid),
                    // First CEO wins
                    Some(first) => ctx.warn(BuildWarning::DuplicateRoot {
                        id: record.id.clone(),
                        root_id: people[first.0].id.clone(),
                    }),
                }
            }

            people.push(Person::from_record(record));
        }

        for idx in 0..people.len() {
            let Some(manager_id) = people[idx].manager_id.clone() else {
                continue;
            };
            match index.get(&manager_id) {
                Some(&manager) => {
                    people[idx].manager = Some(manager);
                    people[manager.0].reports.push(PersonId(idx));
                }
                None => ctx.warn(BuildWarning::DanglingManager {
                    id: people[idx].id.clone(),
                    manager_id,
                }),
            }
        }

        if root.is_none() && !people.is_empty() {
            return Err(OrgError::NoRootFound);
        }

        match root {
            Some(pid) => info!(
                "Built hierarchy of {} employees with CEO {}",
                people.len(),
                people[pid.0].id
            ),
            None => debug!("No employees to build a hierarchy from"),
        }

        Ok(Hierarchy {
            people,
            index,
            root,
        })
    }
}
