//! Employee Records
//!
//! Parses the delimited employee file: a header line, then
//! `id,firstName,lastName,salary[,managerId]` per line. No quoting or
//! escaping is supported, so a comma inside a name splits the field.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::debug;

use crate::context::{AuditContext, BuildWarning};
use crate::error::{OrgError, Result};

const MIN_FIELDS: usize = 4;
const MAX_FIELDS: usize = 5;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based line number in the source, header included
    pub line: usize,
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub salary: u64,
    /// `None` marks the CEO
    pub manager_id: Option<String>,
}

impl Record {
    /// Parse a single data line. Fields past the fifth are ignored.
    pub fn parse(line: usize, content: &str) -> Result<Self> {
        let fields: Vec<&str> = content.split(',').map(str::trim).collect();
        if fields.len() < MIN_FIELDS {
            return Err(OrgError::MalformedRecord {
                line,
                reason: format!("expected at least {} fields, found {}", MIN_FIELDS, fields.len()),
                content: content.to_string(),
            });
        }

        let id = fields[0];
        if id.is_empty() {
            return Err(OrgError::MalformedRecord {
                line,
                reason: "empty employee id".to_string(),
                content: content.to_string(),
            });
        }

        let salary = fields[3].parse::<u64>().map_err(|_| OrgError::InvalidSalary {
            line,
            id: id.to_string(),
            raw: fields[3].to_string(),
        })?;

        let manager_id = fields
            .get(4)
            .filter(|m| !m.is_empty())
            .map(|m| m.to_string());

        Ok(Self {
            line,
            id: id.to_string(),
            first_name: fields[1].to_string(),
            last_name: fields[2].to_string(),
            salary,
            manager_id,
        })
    }
}

/// Read every record from the file at `path`
pub fn read_records(path: impl AsRef<Path>, ctx: &mut AuditContext) -> Result<Vec<Record>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| OrgError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_records(BufReader::new(file), path, ctx)
}

/// Parse records from any buffered source. `origin` only labels I/O errors.
///
/// The first line is the header and is skipped without validation. The
/// first malformed line, blank lines included, aborts the whole read.
pub fn parse_records<R: BufRead>(
    reader: R,
    origin: &Path,
    ctx: &mut AuditContext,
) -> Result<Vec<Record>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let content = line.map_err(|source| OrgError::Io {
            path: origin.to_path_buf(),
            source,
        })?;
        let line_no = idx + 1;

        if line_no == 1 {
            debug!("Skipping header: {}", content);
            continue;
        }
        let record = Record::parse(line_no, &content)?;

        let fields = content.split(',').count();
        if fields > MAX_FIELDS {
            ctx.warn(BuildWarning::ExtraFields {
                line: line_no,
                id: record.id.clone(),
                fields,
            });
        }

        records.push(record);
    }

    debug!("Parsed {} records from {}", records.len(), origin.display());
    Ok(records)
}
