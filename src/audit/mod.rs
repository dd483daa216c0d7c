//! Audits
//!
//! Read-only analyses over a built [`Hierarchy`]. Each auditor walks the
//! people in input order and returns its findings, so repeated runs on the
//! same hierarchy give identical output.

mod depth;
mod salary;

pub use depth::{reporting_depth, reporting_depths, DepthAuditor};
pub use salary::SalaryAuditor;

use serde::Serialize;

use crate::error::Result;
use crate::hierarchy::Hierarchy;
use crate::model::Person;

/// Which analysis produced a set of findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisKind {
    Salary,
    ReportingLine,
}

impl AnalysisKind {
    pub fn title(&self) -> &'static str {
        match self {
            AnalysisKind::Salary => "Manager Salary Analysis",
            AnalysisKind::ReportingLine => "Reporting Line Analysis",
        }
    }
}

/// Identifying fields of the flagged employee
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Subject {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

impl From<&Person> for Subject {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            first_name: person.first_name.clone(),
            last_name: person.last_name.clone(),
        }
    }
}

/// One flagged policy violation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Finding {
    Underpaid {
        subject: Subject,
        salary: u64,
        min_expected: f64,
        deficit: f64,
    },
    Overpaid {
        subject: Subject,
        salary: u64,
        max_expected: f64,
        excess: f64,
    },
    LongReportingLine {
        subject: Subject,
        managers: usize,
        max_allowed: u32,
    },
}

impl Finding {
    pub fn subject(&self) -> &Subject {
        match self {
            Finding::Underpaid { subject, .. }
            | Finding::Overpaid { subject, .. }
            | Finding::LongReportingLine { subject, .. } => subject,
        }
    }
}

pub trait Auditor: Send + Sync {
    fn kind(&self) -> AnalysisKind;

    fn audit(&self, hierarchy: &Hierarchy) -> Result<Vec<Finding>>;
}
