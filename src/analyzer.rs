//! Organization Analyzer
//!
//! Runs the whole pipeline for one input: read records, build the
//! hierarchy, run every auditor over it and collect an [`AuditReport`].

use std::path::Path;
use tracing::info;

use crate::audit::{Auditor, DepthAuditor, SalaryAuditor};
use crate::context::AuditContext;
use crate::error::Result;
use crate::hierarchy::{Hierarchy, HierarchyBuilder};
use crate::model::{read_records, Record};
use crate::report::{AuditReport, Section};

pub struct OrganizationAnalyzer {
    ctx: AuditContext,
    auditors: Vec<Box<dyn Auditor>>,
}

impl OrganizationAnalyzer {
    pub fn new(ctx: AuditContext) -> Self {
        let auditors: Vec<Box<dyn Auditor>> = vec![
            Box::new(SalaryAuditor::new(ctx.config.salary_band)),
            Box::new(DepthAuditor::new(ctx.config.max_depth)),
        ];
        Self { ctx, auditors }
    }

    /// Read the employee file at `path` and analyze it
    pub fn analyze_file(mut self, path: impl AsRef<Path>) -> Result<AuditReport> {
        let path = path.as_ref();
        info!("Reading employee data from: {}", path.display());
        let records = read_records(path, &mut self.ctx)?;
        info!("Loaded {} employee records", records.len());
        self.analyze(records)
    }

    pub fn analyze(mut self, records: Vec<Record>) -> Result<AuditReport> {
        let hierarchy = HierarchyBuilder::new(&mut self.ctx).build(records)?;
        let sections = self.audit(&hierarchy)?;

        Ok(AuditReport {
            employees: hierarchy.len(),
            ceo: hierarchy.ceo().map(|p| p.id.clone()),
            warnings: self.ctx.take_warnings(),
            sections,
        })
    }

    /// Run every auditor over an already built hierarchy
    pub fn audit(&self, hierarchy: &Hierarchy) -> Result<Vec<Section>> {
        self.auditors
            .iter()
            .map(|auditor| {
                let findings = auditor.audit(hierarchy)?;
                info!(
                    "{}: {} finding(s)",
                    auditor.kind().title(),
                    findings.len()
                );
                Ok(Section {
                    kind: auditor.kind(),
                    findings,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::AnalysisKind;
    use crate::config::AuditConfig;

    fn records(lines: &[&str]) -> Vec<Record> {
        lines
            .iter()
            .enumerate()
            .map(|(i, l)| Record::parse(i + 2, l).unwrap())
            .collect()
    }

    #[test]
    fn test_sections_in_fixed_order() {
        let analyzer = OrganizationAnalyzer::new(AuditContext::default());
        let report = analyzer
            .analyze(records(&["1,A,A,100,", "2,B,B,100,1"]))
            .unwrap();
        let kinds: Vec<AnalysisKind> = report.sections.iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![AnalysisKind::Salary, AnalysisKind::ReportingLine]);
        assert_eq!(report.employees, 2);
        assert_eq!(report.ceo.as_deref(), Some("1"));
    }

    #[test]
    fn test_config_reaches_auditors() {
        let config = AuditConfig::default().with_max_depth(0);
        let analyzer = OrganizationAnalyzer::new(AuditContext::new(config));
        let report = analyzer
            .analyze(records(&["1,A,A,150,", "2,B,B,100,1"]))
            .unwrap();
        let lines = report.section(AnalysisKind::ReportingLine).unwrap();
        assert_eq!(lines.findings.len(), 1);
    }

    #[test]
    fn test_warnings_move_into_report() {
        let analyzer = OrganizationAnalyzer::new(AuditContext::default());
        let report = analyzer
            .analyze(records(&["1,A,A,100,", "2,B,B,100,", "3,C,C,100,9"]))
            .unwrap();
        assert_eq!(report.warnings.len(), 2);
    }

    #[test]
    fn test_audit_twice_is_identical() {
        let analyzer = OrganizationAnalyzer::new(AuditContext::default());
        let mut ctx = AuditContext::default();
        let hierarchy = HierarchyBuilder::new(&mut ctx)
            .build(records(&["1,A,A,1000,", "2,B,B,100,1", "3,C,C,90,2"]))
            .unwrap();
        assert_eq!(
            analyzer.audit(&hierarchy).unwrap(),
            analyzer.audit(&hierarchy).unwrap()
        );
    }
}
