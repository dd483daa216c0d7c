//! Reporter
//!
//! Turns audit findings into output. Text mode prints one line per finding
//! and a summary line for an analysis with nothing to report; JSON mode
//! serializes the whole report.

use serde::Serialize;
use std::io::{self, Write};

use crate::audit::{AnalysisKind, Finding};
use crate::context::BuildWarning;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Findings of one analysis
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub kind: AnalysisKind,
    pub findings: Vec<Finding>,
}

/// Everything one run produced
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuditReport {
    pub employees: usize,
    pub ceo: Option<String>,
    pub warnings: Vec<BuildWarning>,
    pub sections: Vec<Section>,
}

impl AuditReport {
    pub fn section(&self, kind: AnalysisKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.sections.iter().flat_map(|s| s.findings.iter())
    }
}

pub struct Reporter {
    format: ReportFormat,
}

impl Reporter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    pub fn write<W: Write>(&self, report: &AuditReport, out: &mut W) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => {
                for section in &report.sections {
                    tracing::info!("--- {} ---", section.kind.title());
                    if section.findings.is_empty() {
                        writeln!(out, "{}", all_clear(section.kind))?;
                    }
                    for finding in &section.findings {
                        writeln!(out, "{}", format_finding(finding))?;
                    }
                }
            }
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, report)?;
                writeln!(out)?;
            }
        }
        out.flush()
    }
}

pub fn all_clear(kind: AnalysisKind) -> &'static str {
    match kind {
        AnalysisKind::Salary => {
            "All managers earn within the expected range relative to their subordinates."
        }
        AnalysisKind::ReportingLine => "No employees found with excessively long reporting lines.",
    }
}

pub fn format_finding(finding: &Finding) -> String {
    match finding {
        Finding::Underpaid {
            subject,
            salary,
            min_expected,
            deficit,
        } => format!(
            "Manager {} {} (ID: {}) earns less than they should. Current: {}, Expected Min: {:.2}. Needs {:.2} more.",
            subject.first_name, subject.last_name, subject.id, salary, min_expected, deficit
        ),
        Finding::Overpaid {
            subject,
            salary,
            max_expected,
            excess,
        } => format!(
            "Manager {} {} (ID: {}) earns more than they should. Current: {}, Expected Max: {:.2}. Needs {:.2} less.",
            subject.first_name, subject.last_name, subject.id, salary, max_expected, excess
        ),
        Finding::LongReportingLine {
            subject,
            managers,
            max_allowed,
        } => format!(
            "Employee {} {} (ID: {}) has a reporting line which is too long. Managers above: {} (Max allowed: {}).",
            subject.first_name, subject.last_name, subject.id, managers, max_allowed
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Subject;

    fn subject(id: &str, first: &str, last: &str) -> Subject {
        Subject {
            id: id.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
        }
    }

    fn report(salary: Vec<Finding>, lines: Vec<Finding>) -> AuditReport {
        AuditReport {
            employees: 7,
            ceo: Some("123".to_string()),
            warnings: Vec::new(),
            sections: vec![
                Section {
                    kind: AnalysisKind::Salary,
                    findings: salary,
                },
                Section {
                    kind: AnalysisKind::ReportingLine,
                    findings: lines,
                },
            ],
        }
    }

    fn render(format: ReportFormat, report: &AuditReport) -> String {
        let mut out = Vec::new();
        Reporter::new(format).write(report, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_format_overpaid() {
        let line = format_finding(&Finding::Overpaid {
            subject: subject("123", "Joe", "Doe"),
            salary: 70000,
            max_expected: 69000.0,
            excess: 1000.0,
        });
        assert_eq!(
            line,
            "Manager Joe Doe (ID: 123) earns more than they should. Current: 70000, Expected Max: 69000.00. Needs 1000.00 less."
        );
    }

    #[test]
    fn test_format_underpaid() {
        let line = format_finding(&Finding::Underpaid {
            subject: subject("124", "Martin", "Chekov"),
            salary: 45000,
            min_expected: 60000.0,
            deficit: 15000.0,
        });
        assert!(line.starts_with("Manager Martin Chekov (ID: 124) earns less"));
        assert!(line.ends_with("Needs 15000.00 more."));
    }

    #[test]
    fn test_text_report_lines() {
        let out = render(
            ReportFormat::Text,
            &report(
                Vec::new(),
                vec![Finding::LongReportingLine {
                    subject: subject("500", "David", "Jones"),
                    managers: 5,
                    max_allowed: 4,
                }],
            ),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            vec![
                "All managers earn within the expected range relative to their subordinates.",
                "Employee David Jones (ID: 500) has a reporting line which is too long. Managers above: 5 (Max allowed: 4).",
            ]
        );
    }

    #[test]
    fn test_json_report_is_tagged() {
        let out = render(
            ReportFormat::Json,
            &report(
                vec![Finding::Overpaid {
                    subject: subject("123", "Joe", "Doe"),
                    salary: 70000,
                    max_expected: 69000.0,
                    excess: 1000.0,
                }],
                Vec::new(),
            ),
        );
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["employees"], 7);
        assert_eq!(value["sections"][0]["kind"], "salary");
        assert_eq!(value["sections"][0]["findings"][0]["kind"], "overpaid");
        assert_eq!(value["sections"][0]["findings"][0]["excess"], 1000.0);
        assert_eq!(value["sections"][1]["kind"], "reporting_line");
    }
}
