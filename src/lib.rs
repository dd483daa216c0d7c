//! Organization Audit
//!
//! Rebuilds a company's management tree from a flat employee file and
//! checks it against two policies:
//! - Manager salaries within a band of their direct reports' average
//! - Reporting lines no longer than a maximum number of managers

pub mod analyzer;
pub mod audit;
pub mod config;
pub mod context;
pub mod error;
pub mod hierarchy;
pub mod model;
pub mod report;

// Re-exports for convenience
pub use analyzer::OrganizationAnalyzer;
pub use audit::{Auditor, DepthAuditor, Finding, SalaryAuditor};
pub use config::AuditConfig;
pub use context::{AuditContext, BuildWarning};
pub use error::{OrgError, Result};
pub use hierarchy::{Hierarchy, HierarchyBuilder};
pub use model::{Person, PersonId, Record};
pub use report::{AuditReport, ReportFormat, Reporter};
