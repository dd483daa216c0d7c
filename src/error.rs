//! Error types
//!
//! Every fatal condition of a run. Non-fatal conditions are recorded as
//! [`BuildWarning`](crate::context::BuildWarning)s instead.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, OrgError>;

#[derive(Debug, Error)]
pub enum OrgError {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid line {line} ({reason}): {content}")]
    MalformedRecord {
        line: usize,
        reason: String,
        content: String,
    },

    #[error("invalid salary format for employee {id} on line {line}: '{raw}'")]
    InvalidSalary { line: usize, id: String, raw: String },

    #[error("duplicate employee id {id} on line {line}")]
    DuplicateId { id: String, line: usize },

    #[error("no CEO found: every employee has a manager id")]
    NoRootFound,

    #[error("cycle detected in the reporting line of employee {id}")]
    CycleDetected { id: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
