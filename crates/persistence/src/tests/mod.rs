// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::InMemoryReportStore;
use signalements_audit::{Actor, Cause};
use signalements_domain::{OfficeId, Report, ReportAttributes, ReportId, ReportState};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("test-actor"), String::from("system"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("test-cause"), String::from("Test operation"))
}

/// Creates a store holding one report per `(id, state)` pair.
pub fn create_store_with(reports: &[(u64, ReportState)]) -> InMemoryReportStore {
    let store: InMemoryReportStore = InMemoryReportStore::new();
    for (id, state) in reports {
        store
            .insert(Report::with_state(ReportId::new(*id), *state))
            .expect("unique test report");
    }
    store
}

/// Creates a report assigned to office 5.
pub fn create_assigned_report(id: u64) -> Report {
    let mut report: Report = Report::with_state(ReportId::new(id), ReportState::Accepted);
    report.assign_attributes(&ReportAttributes::new().with_office(OfficeId::new(5)));
    assert!(report.assign());
    report
}
