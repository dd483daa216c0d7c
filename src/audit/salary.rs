//! Manager salary band check

use tracing::debug;

use super::{AnalysisKind, Auditor, Finding};
use crate::config::SalaryBand;
use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::model::Person;

/// Flags managers paid outside `band` relative to the average salary of
/// their direct reports. Salaries exactly on an edge pass.
pub struct SalaryAuditor {
    band: SalaryBand,
}

impl SalaryAuditor {
    pub fn new(band: SalaryBand) -> Self {
        Self { band }
    }

    pub fn check(&self, hierarchy: &Hierarchy, manager: &Person) -> Option<Finding> {
        if !manager.is_manager() {
            return None;
        }

        // u128 cannot overflow: at most usize::MAX reports of at most u64::MAX each
        let total: u128 = hierarchy
            .reports_of(manager)
            .map(|r| u128::from(r.salary))
            .sum();
        let avg = total as f64 / manager.reports().len() as f64;
        let (min_expected, max_expected) = self.band.bounds(avg);
        let salary = manager.salary as f64;

        debug!(
            "{}: salary {}, reports average {:.2}, band [{:.2}, {:.2}]",
            manager.id, manager.salary, avg, min_expected, max_expected
        );

        if salary < min_expected {
            Some(Finding::Underpaid {
                subject: manager.into(),
                salary: manager.salary,
                min_expected,
                deficit: min_expected - salary,
            })
        } else if salary > max_expected {
            Some(Finding::Overpaid {
                subject: manager.into(),
                salary: manager.salary,
                max_expected,
                excess: salary - max_expected,
            })
        } else {
            None
        }
    }
}

impl Default for SalaryAuditor {
    fn default() -> Self {
        Self::new(SalaryBand::default())
    }
}

impl Auditor for SalaryAuditor {
    fn kind(&self) -> AnalysisKind {
        AnalysisKind::Salary
    }

    fn audit(&self, hierarchy: &Hierarchy) -> Result<Vec<Finding>> {
        Ok(hierarchy
            .iter()
            .filter_map(|(_, person)| self.check(hierarchy, person))
            .collect())
    }
}
