//! Reporting line length check

use std::collections::HashSet;

use super::{AnalysisKind, Auditor, Finding};
use crate::config::DEFAULT_MAX_DEPTH;
use crate::error::{OrgError, Result};
use crate::hierarchy::Hierarchy;
use crate::model::PersonId;

/// Number of managers above `pid`, counted by following manager links
/// until one is missing. The CEO and anyone with an unresolved manager sit
/// at depth 0.
///
/// Fails with [`OrgError::CycleDetected`] if the walk revisits a person.
pub fn reporting_depth(hierarchy: &Hierarchy, pid: PersonId) -> Result<usize> {
    let mut visited = HashSet::with_capacity(hierarchy.len().min(64));
    let mut current = pid;
    let mut depth = 0;

    visited.insert(current);
    while let Some(manager) = hierarchy.person(current).manager() {
        if !visited.insert(manager) {
            return Err(OrgError::CycleDetected {
                id: hierarchy.person(pid).id.clone(),
            });
        }
        depth += 1;
        current = manager;
    }

    Ok(depth)
}

/// [`reporting_depth`] of every person, indexed by [`PersonId::index`].
///
/// Each person is climbed at most once: a walk stops at the first manager
/// whose depth is already known, then fills in the path below it. A person
/// met twice on the same walk is a cycle.
pub fn reporting_depths(hierarchy: &Hierarchy) -> Result<Vec<usize>> {
    let mut depths: Vec<Option<usize>> = vec![None; hierarchy.len()];
    let mut on_path = vec![false; hierarchy.len()];
    let mut path: Vec<PersonId> = Vec::new();

    for (pid, _) in hierarchy.iter() {
        let mut current = pid;
        let known = loop {
            let idx = current.index();
            if let Some(depth) = depths[idx] {
                break Some(depth);
            }
            if on_path[idx] {
                return Err(OrgError::CycleDetected {
                    id: hierarchy.person(pid).id.clone(),
                });
            }
            on_path[idx] = true;
            path.push(current);
            match hierarchy.person(current).manager() {
                Some(manager) => current = manager,
                None => break None,
            }
        };

        // Top of the walk is either a known person's report or a person with no manager
        let mut next = known.map_or(0, |depth| depth + 1);
        for node in path.drain(..).rev() {
            on_path[node.index()] = false;
            depths[node.index()] = Some(next);
            next += 1;
        }
    }

    Ok(depths.into_iter().map(Option::unwrap_or_default).collect())
}

/// Flags everyone with more than `max_depth` managers between them and
/// the CEO. The CEO is never evaluated.
pub struct DepthAuditor {
    max_depth: u32,
}

impl DepthAuditor {
    pub fn new(max_depth: u32) -> Self {
        Self { max_depth }
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }
}

impl Default for DepthAuditor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl Auditor for DepthAuditor {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::ReportingLine
    }

    fn audit(&self, hierarchy: &Hierarchy) -> Result<Vec<Finding>> {
        let Some(root) = hierarchy.root() else {
            if !hierarchy.is_empty() {
                tracing::warn!("No CEO found, cannot analyze reporting lines.");
            }
            return Ok(Vec::new());
        };

        let depths = reporting_depths(hierarchy)?;
        let mut findings = Vec::new();
        for (pid, person) in hierarchy.iter() {
            if pid == root {
                continue;
            }
            let managers = depths[pid.index()];
            if managers > self.max_depth as usize {
                findings.push(Finding::LongReportingLine {
                    subject: person.into(),
                    managers,
                    max_allowed: self.max_depth,
                });
            }
        }
        Ok(findings)
    }
}
