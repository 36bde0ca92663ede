// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ReportCollection;
use signalements_domain::{
    ErrorList, OfficeId, Report, ReportAttributes, ReportId, ReportState, Resolution,
};

pub fn create_report_in(state: ReportState) -> Report {
    Report::with_state(ReportId::new(101), state)
}

pub fn create_assigned_report() -> Report {
    let mut report: Report = create_report_in(ReportState::Accepted);
    report.assign_attributes(&ReportAttributes::new().with_office(OfficeId::new(5)));
    assert!(report.assign());
    report
}

/// A report in `state` with every attribute and timestamp filled in.
pub fn create_stamped_report_in(state: ReportState) -> Report {
    serde_json::from_value(serde_json::json!({
        "id": 101,
        "state": state,
        "office_id": 5,
        "reponse": "Pris en compte",
        "resolution_motif": "Local démoli",
        "accepted_at": "2026-03-02T10:00:00Z",
        "assigned_at": "2026-03-03T10:00:00Z",
        "resolved_at": "2026-03-04T10:00:00Z",
        "approved_at": "2026-03-05T10:00:00Z",
        "canceled_at": "2026-03-05T11:00:00Z",
        "rejected_at": "2026-03-06T10:00:00Z",
        "denied_at": "2026-03-01T10:00:00Z",
    }))
    .unwrap()
}

/// A call received by a `RecordingCollection`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionCall {
    AcceptAll(ReportAttributes),
    AssignAll(OfficeId, ReportAttributes),
    ConfirmAll(ReportAttributes),
    RejectAll(ReportAttributes),
    ResolveAll(Resolution, ReportAttributes),
}

/// A collection double that records every call and answers with a
/// configurable outcome.
#[derive(Debug, Default)]
pub struct RecordingCollection {
    pub calls: Vec<CollectionCall>,
    pub failure: Option<ErrorList>,
}

impl RecordingCollection {
    pub fn failing_with(errors: ErrorList) -> Self {
        Self {
            calls: Vec::new(),
            failure: Some(errors),
        }
    }

    fn record(&mut self, call: CollectionCall) -> Result<(), ErrorList> {
        self.calls.push(call);
        self.failure.clone().map_or(Ok(()), Err)
    }
}

impl ReportCollection for RecordingCollection {
    fn accept_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.record(CollectionCall::AcceptAll(attributes.clone()))
    }

    fn assign_all(
        &mut self,
        office_id: OfficeId,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList> {
        self.record(CollectionCall::AssignAll(office_id, attributes.clone()))
    }

    fn confirm_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.record(CollectionCall::ConfirmAll(attributes.clone()))
    }

    fn reject_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.record(CollectionCall::RejectAll(attributes.clone()))
    }

    fn resolve_all(
        &mut self,
        resolution: Resolution,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList> {
        self.record(CollectionCall::ResolveAll(resolution, attributes.clone()))
    }
}
