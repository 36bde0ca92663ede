// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    ErrorKind, Field, OfficeId, Report, ReportAttributes, ReportId, ReportState, Resolution,
    Transition,
};

fn report_in(state: ReportState) -> Report {
    Report::with_state(ReportId::new(1), state)
}

fn assigned_report() -> Report {
    let mut report = report_in(ReportState::Accepted);
    report.assign_attributes(&ReportAttributes::new().with_office(OfficeId::new(7)));
    assert!(report.assign());
    report
}

#[test]
fn test_new_report_is_draft() {
    let report = Report::new(ReportId::new(42));
    assert_eq!(report.id(), ReportId::new(42));
    assert_eq!(report.state(), ReportState::Draft);
    assert!(report.errors().is_empty());
}

#[test]
fn test_assign_attributes_only_writes_supplied_fields() {
    let mut report = report_in(ReportState::Accepted);
    report.assign_attributes(
        &ReportAttributes::new()
            .with_office(OfficeId::new(3))
            .with_reponse("Pris en compte"),
    );
    report.assign_attributes(&ReportAttributes::new());

    assert_eq!(report.office_id(), Some(OfficeId::new(3)));
    assert_eq!(report.reponse(), Some("Pris en compte"));
    assert_eq!(report.resolution_motif(), None);
    assert_eq!(report.state(), ReportState::Accepted);
}

#[test]
fn test_accept_sets_accepted_at() {
    let mut report = report_in(ReportState::Transmitted);

    assert!(report.accept());
    assert_eq!(report.state(), ReportState::Accepted);
    assert!(report.accepted_at().is_some());
    assert!(report.errors().is_empty());
}

fn denied_report() -> Report {
    serde_json::from_str(r#"{"id": 9, "state": "denied", "denied_at": "2026-03-02T10:00:00Z"}"#)
        .unwrap()
}

#[test]
fn test_accept_keeps_denied_at() {
    let mut report = denied_report();
    let denied_at = report.denied_at();
    assert!(denied_at.is_some());

    assert!(report.accept());
    assert_eq!(report.state(), ReportState::Accepted);
    assert_eq!(report.denied_at(), denied_at);
}

#[test]
fn test_undo_acceptance_of_denied_report_returns_to_denied() {
    let mut report = denied_report();
    let denied_at = report.denied_at();
    assert!(report.accept());

    assert!(report.undo_acceptance());
    assert_eq!(report.state(), ReportState::Denied);
    assert_eq!(report.denied_at(), denied_at);
    assert_eq!(report.accepted_at(), None);
}

#[test]
fn test_undo_acceptance_of_transmitted_report_returns_to_acknowledged() {
    let mut report = report_in(ReportState::Transmitted);
    assert!(report.accept());

    assert!(report.undo_acceptance());
    assert_eq!(report.state(), ReportState::Acknowledged);
    assert_eq!(report.accepted_at(), None);
}

#[test]
fn test_undo_rejection_after_acceptance_returns_to_accepted() {
    let mut report = report_in(ReportState::Transmitted);
    assert!(report.accept());
    let accepted_at = report.accepted_at();
    assert!(report.reject());

    assert!(report.undo_rejection());
    assert_eq!(report.state(), ReportState::Accepted);
    assert_eq!(report.accepted_at(), accepted_at);
    assert_eq!(report.rejected_at(), None);
}

#[test]
fn test_illegal_transition_leaves_report_untouched() {
    let mut report = report_in(ReportState::Draft);
    let before = report.clone();

    assert!(!report.accept());

    let mut after = report.clone();
    after.errors_mut().clear();
    assert_eq!(after, before);
    assert!(report.errors().contains(
        Field::State,
        &ErrorKind::InvalidTransition {
            from: ReportState::Draft,
            transition: Transition::Accept,
        }
    ));
}

#[test]
fn test_assign_without_office_is_refused() {
    let mut report = report_in(ReportState::Accepted);

    assert!(!report.assign());
    assert_eq!(report.state(), ReportState::Accepted);
    assert_eq!(report.assigned_at(), None);
    assert!(report.errors().contains(Field::OfficeId, &ErrorKind::Blank));
}

#[test]
fn test_assign_sets_assigned_at() {
    let report = assigned_report();
    assert_eq!(report.state(), ReportState::Assigned);
    assert!(report.assigned_at().is_some());
}

#[test]
fn test_undo_assignment_clears_office() {
    let mut report = assigned_report();

    assert!(report.undo_assignment());
    assert_eq!(report.state(), ReportState::Accepted);
    assert_eq!(report.office_id(), None);
    assert_eq!(report.assigned_at(), None);
}

#[test]
fn test_resolve_then_confirm_applicable() {
    let mut report = assigned_report();

    assert!(report.resolve(Resolution::Applicable));
    assert_eq!(report.state(), ReportState::Applicable);
    assert!(report.resolved_at().is_some());

    assert!(report.confirm());
    assert_eq!(report.state(), ReportState::Approved);
    assert!(report.approved_at().is_some());
    assert_eq!(report.canceled_at(), None);
}

#[test]
fn test_confirm_inapplicable_cancels() {
    let mut report = assigned_report();
    assert!(report.resolve(Resolution::Inapplicable));

    assert!(report.confirm());
    assert_eq!(report.state(), ReportState::Canceled);
    assert!(report.canceled_at().is_some());
    assert_eq!(report.approved_at(), None);
}

#[test]
fn test_undo_resolution_clears_motif() {
    let mut report = assigned_report();
    report.assign_attributes(&ReportAttributes::new().with_resolution_motif("Local démoli"));
    assert!(report.resolve(Resolution::Inapplicable));

    assert!(report.undo_resolution());
    assert_eq!(report.state(), ReportState::Assigned);
    assert_eq!(report.resolved_at(), None);
    assert_eq!(report.resolution_motif(), None);
}

#[test]
fn test_reject_and_undo_rejection() {
    let mut report = report_in(ReportState::Acknowledged);
    report.assign_attributes(&ReportAttributes::new().with_reponse("Hors périmètre"));

    assert!(report.reject());
    assert_eq!(report.state(), ReportState::Rejected);
    assert!(report.rejected_at().is_some());

    assert!(report.undo_rejection());
    assert_eq!(report.state(), ReportState::Acknowledged);
    assert_eq!(report.rejected_at(), None);
    assert_eq!(report.reponse(), None);
}

#[test]
fn test_invalid_attributes_block_transition() {
    let mut report = report_in(ReportState::Transmitted);
    report.assign_attributes(&ReportAttributes::new().with_reponse("   "));

    assert!(!report.reject());
    assert_eq!(report.state(), ReportState::Transmitted);
    assert!(report.errors().contains(Field::Reponse, &ErrorKind::Blank));
    assert!(!report.errors().has_invalid_transition());
}

#[test]
fn test_transition_clears_previous_errors() {
    let mut report = report_in(ReportState::Accepted);
    assert!(!report.accept());
    assert!(!report.errors().is_empty());

    assert!(report.undo_acceptance());
    assert!(report.errors().is_empty());
}

#[test]
fn test_is_valid_populates_errors() {
    let mut report = report_in(ReportState::Assigned);
    report.assign_attributes(
        &ReportAttributes::new().with_resolution_motif("x".repeat(256)),
    );

    assert!(!report.is_valid());
    assert!(
        report
            .errors()
            .contains(Field::ResolutionMotif, &ErrorKind::TooLong { maximum: 255 })
    );
}

#[test]
fn test_report_json_round_trip_skips_errors() {
    let mut report = assigned_report();
    assert!(!report.accept());
    assert!(!report.errors().is_empty());

    let json = serde_json::to_string(&report).unwrap();
    assert!(!json.contains("errors"));

    let restored: Report = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.state(), ReportState::Assigned);
    assert_eq!(restored.office_id(), Some(OfficeId::new(7)));
    assert_eq!(restored.assigned_at(), report.assigned_at());
    assert!(restored.errors().is_empty());
}

#[test]
fn test_report_ids_parse_with_or_without_hash() {
    assert_eq!("12".parse(), Ok(ReportId::new(12)));
    assert_eq!("#12".parse(), Ok(ReportId::new(12)));
    assert!("twelve".parse::<ReportId>().is_err());
    assert_eq!(ReportId::new(12).to_string(), "#12");
}

#[test]
fn test_without_office_keeps_other_attributes() {
    let attributes = ReportAttributes::new()
        .with_office(OfficeId::new(1))
        .with_reponse("ok");
    let rest = attributes.without_office();

    assert_eq!(rest.office_id, None);
    assert_eq!(rest.reponse.as_deref(), Some("ok"));
    assert!(ReportAttributes::new().is_empty());
    assert!(!rest.is_empty());
}
