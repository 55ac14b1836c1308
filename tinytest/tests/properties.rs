use std::cell::RefCell;

use proptest::prelude::*;
use tinytest::{Registry, ReportConfig, Runner, TestCase, unit_fn};

const SUITES: [&str; 3] = ["alpha", "beta", "gamma"];

fn suite_changes(plan: &[(usize, bool)]) -> usize {
    let mut current = "";
    let mut changes = 0;
    for &(suite, _) in plan {
        if SUITES[suite] != current {
            current = SUITES[suite];
            changes += 1;
        }
    }
    changes
}

proptest! {
    #[test]
    fn every_record_runs_once_in_order(
        plan in prop::collection::vec((0usize..SUITES.len(), any::<bool>()), 0..24)
    ) {
        let order = RefCell::new(Vec::new());
        let order = &order;

        let mut units: Vec<_> = plan
            .iter()
            .enumerate()
            .map(|(i, &(_, fail))| {
                unit_fn(move |t| {
                    order.borrow_mut().push(i);
                    if fail {
                        t.expect_eq(i, usize::MAX);
                    }
                    // Soft assertions: this still runs after a failure.
                    t.expect_true(true);
                })
            })
            .collect();
        let records: Vec<_> = units
            .iter_mut()
            .zip(&plan)
            .enumerate()
            .map(|(i, (unit, &(suite, _)))| {
                let name: &'static str = format!("case_{i}").leak();
                TestCase::new(SUITES[suite], name, unit)
            })
            .collect();

        let mut registry = Registry::new();
        for record in &records {
            prop_assert!(registry.append(record));
        }

        let mut out = String::new();
        let stats = Runner::new(&registry, ReportConfig::plain()).run(&mut out);

        let expected_failed = plan.iter().filter(|&&(_, fail)| fail).count();
        prop_assert_eq!(stats.executed(), plan.len());
        prop_assert_eq!(stats.failed(), expected_failed);
        prop_assert_eq!(
            registry.iter().filter(|r| !r.passed()).count(),
            expected_failed
        );
        prop_assert_eq!(
            &*order.borrow(),
            &(0..plan.len()).collect::<Vec<_>>()
        );
        prop_assert_eq!(
            out.lines().filter(|l| l.starts_with(" -> Suite: ")).count(),
            suite_changes(&plan)
        );
    }
}
