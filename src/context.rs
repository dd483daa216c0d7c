//! Run Context
//!
//! Carries the configuration and the non-fatal warnings collected while
//! reading and building. One context per analysis run.

use serde::Serialize;
use std::fmt;

use crate::config::AuditConfig;

/// A non-fatal problem found in the input. The run continues.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BuildWarning {
    /// Manager id present but not found among the employees
    DanglingManager { id: String, manager_id: String },
    /// Another employee without a manager after the CEO was already chosen
    DuplicateRoot { id: String, root_id: String },
    /// Line carried more fields than the format defines
    ExtraFields { line: usize, id: String, fields: usize },
}

impl fmt::Display for BuildWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildWarning::DanglingManager { id, manager_id } => write!(
                f,
                "Manager with ID {} for employee {} not found.",
                manager_id, id
            ),
            BuildWarning::DuplicateRoot { id, root_id } => write!(
                f,
                "Multiple CEOs found: employee {} has no manager, keeping {} as CEO.",
                id, root_id
            ),
            BuildWarning::ExtraFields { line, id, fields } => write!(
                f,
                "Line {} (employee {}) has {} fields, ignoring all after the fifth.",
                line, id, fields
            ),
        }
    }
}

#[derive(Debug, Default)]
pub struct AuditContext {
    pub config: AuditConfig,
    warnings: Vec<BuildWarning>,
}

impl AuditContext {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            warnings: Vec::new(),
        }
    }

    /// Record a warning and log it
    pub fn warn(&mut self, warning: BuildWarning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[BuildWarning] {
        &self.warnings
    }

    pub fn take_warnings(&mut self) -> Vec<BuildWarning> {
        std::mem::take(&mut self.warnings)
    }
}
