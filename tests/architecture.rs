//! Architecture Verification Suite
//!
//! The analyses share one immutable hierarchy, so everything they touch
//! must be safe to hand across threads.

#[cfg(test)]
mod architecture_tests {
    use org_audit::{Auditor, DepthAuditor, Hierarchy, SalaryAuditor};

    #[test]
    fn test_auditors_are_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<SalaryAuditor>();
        assert_send_sync::<DepthAuditor>();
        assert_send_sync::<Box<dyn Auditor>>();
    }

    #[test]
    fn test_hierarchy_is_thread_safe() {
        fn assert_send_sync<T: Send + Sync>() {}

        assert_send_sync::<Hierarchy>();
        assert_send_sync::<org_audit::AuditReport>();
    }

    // Both auditors only borrow the hierarchy, so they can run side by side
    #[test]
    fn test_auditors_share_hierarchy_across_threads() {
        use org_audit::{AuditContext, HierarchyBuilder, Record};

        let records = ["1,A,A,100,", "2,B,B,90,1", "3,C,C,80,2"]
            .iter()
            .enumerate()
            .map(|(i, l)| Record::parse(i + 2, l).unwrap())
            .collect();
        let hierarchy = HierarchyBuilder::new(&mut AuditContext::default())
            .build(records)
            .unwrap();

        let (salary, depth) = std::thread::scope(|s| {
            let salary = s.spawn(|| SalaryAuditor::default().audit(&hierarchy));
            let depth = s.spawn(|| DepthAuditor::default().audit(&hierarchy));
            (salary.join().unwrap(), depth.join().unwrap())
        });

        assert_eq!(salary.unwrap(), SalaryAuditor::default().audit(&hierarchy).unwrap());
        assert!(depth.unwrap().is_empty());
    }
}
