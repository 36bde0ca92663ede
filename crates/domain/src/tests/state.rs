// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, ReportState, Resolution, Transition};

#[test]
fn test_state_string_round_trip() {
    for state in ReportState::ALL {
        let s = state.as_str();
        match s.parse::<ReportState>() {
            Ok(parsed) => assert_eq!(state, parsed),
            Err(e) => panic!("Failed to parse state string: {s}: {e}"),
        }
    }
}

#[test]
fn test_invalid_state_string() {
    let result = "archived".parse::<ReportState>();
    assert_eq!(
        result,
        Err(DomainError::InvalidReportState(String::from("archived")))
    );
}

#[test]
fn test_state_serializes_as_snake_case() {
    let json = serde_json::to_string(&ReportState::InActiveTransmission).unwrap();
    assert_eq!(json, "\"in_active_transmission\"");

    let state: ReportState = serde_json::from_str("\"acknowledged\"").unwrap();
    assert_eq!(state, ReportState::Acknowledged);
}

#[test]
fn test_accept_predecessors() {
    for from in [
        ReportState::Transmitted,
        ReportState::Acknowledged,
        ReportState::Denied,
    ] {
        assert_eq!(
            from.transition(Transition::Accept),
            Some(ReportState::Accepted)
        );
    }

    for from in [
        ReportState::Draft,
        ReportState::Ready,
        ReportState::InActiveTransmission,
        ReportState::Accepted,
        ReportState::Assigned,
        ReportState::Approved,
        ReportState::Rejected,
    ] {
        assert_eq!(from.transition(Transition::Accept), None);
    }
}

#[test]
fn test_assign_allows_reassignment() {
    assert_eq!(
        ReportState::Accepted.transition(Transition::Assign),
        Some(ReportState::Assigned)
    );
    assert_eq!(
        ReportState::Assigned.transition(Transition::Assign),
        Some(ReportState::Assigned)
    );
    assert_eq!(ReportState::Acknowledged.transition(Transition::Assign), None);
}

#[test]
fn test_resolve_targets_follow_resolution() {
    for from in [
        ReportState::Assigned,
        ReportState::Applicable,
        ReportState::Inapplicable,
    ] {
        assert_eq!(
            from.transition(Transition::Resolve(Resolution::Applicable)),
            Some(ReportState::Applicable)
        );
        assert_eq!(
            from.transition(Transition::Resolve(Resolution::Inapplicable)),
            Some(ReportState::Inapplicable)
        );
    }

    assert_eq!(
        ReportState::Accepted.transition(Transition::Resolve(Resolution::Applicable)),
        None
    );
}

#[test]
fn test_confirm_depends_on_resolution() {
    assert_eq!(
        ReportState::Applicable.transition(Transition::Confirm),
        Some(ReportState::Approved)
    );
    assert_eq!(
        ReportState::Inapplicable.transition(Transition::Confirm),
        Some(ReportState::Canceled)
    );
    assert_eq!(ReportState::Assigned.transition(Transition::Confirm), None);
}

#[test]
fn test_reject_predecessors() {
    for from in [
        ReportState::Transmitted,
        ReportState::Acknowledged,
        ReportState::Accepted,
    ] {
        assert_eq!(
            from.transition(Transition::Reject),
            Some(ReportState::Rejected)
        );
    }
    assert_eq!(ReportState::Assigned.transition(Transition::Reject), None);
    assert_eq!(ReportState::Rejected.transition(Transition::Reject), None);
}

#[test]
fn test_undo_transitions_step_back() {
    assert_eq!(
        ReportState::Accepted.transition(Transition::UndoAcceptance),
        Some(ReportState::Acknowledged)
    );
    assert_eq!(
        ReportState::Assigned.transition(Transition::UndoAssignment),
        Some(ReportState::Accepted)
    );
    assert_eq!(
        ReportState::Applicable.transition(Transition::UndoResolution),
        Some(ReportState::Assigned)
    );
    assert_eq!(
        ReportState::Inapplicable.transition(Transition::UndoResolution),
        Some(ReportState::Assigned)
    );
    assert_eq!(
        ReportState::Rejected.transition(Transition::UndoRejection),
        Some(ReportState::Acknowledged)
    );
}

#[test]
fn test_undo_requires_matching_state() {
    assert_eq!(
        ReportState::Assigned.transition(Transition::UndoAcceptance),
        None
    );
    assert_eq!(
        ReportState::Accepted.transition(Transition::UndoAssignment),
        None
    );
    assert_eq!(
        ReportState::Approved.transition(Transition::UndoResolution),
        None
    );
    assert_eq!(
        ReportState::Acknowledged.transition(Transition::UndoRejection),
        None
    );
}

#[test]
fn test_collectivity_states_have_no_review_transition() {
    for state in [
        ReportState::Draft,
        ReportState::Ready,
        ReportState::InActiveTransmission,
    ] {
        assert!(state.available_transitions().is_empty());
    }
}

#[test]
fn test_confirmed_states_are_final() {
    assert!(ReportState::Approved.available_transitions().is_empty());
    assert!(ReportState::Canceled.available_transitions().is_empty());
}

#[test]
fn test_available_transitions_from_assigned() {
    let transitions = ReportState::Assigned.available_transitions();
    assert_eq!(
        transitions,
        vec![
            Transition::Assign,
            Transition::UndoAssignment,
            Transition::Resolve(Resolution::Applicable),
            Transition::Resolve(Resolution::Inapplicable),
        ]
    );
}

#[test]
fn test_checked_transition_reports_illegal_transition() {
    assert_eq!(
        ReportState::Draft.checked_transition(Transition::Confirm),
        Err(DomainError::IllegalTransition {
            from: ReportState::Draft,
            transition: Transition::Confirm,
        })
    );
    assert_eq!(
        ReportState::Applicable.checked_transition(Transition::Confirm),
        Ok(ReportState::Approved)
    );
}

#[test]
fn test_resolution_parsing() {
    assert_eq!("applicable".parse(), Ok(Resolution::Applicable));
    assert_eq!("inapplicable".parse(), Ok(Resolution::Inapplicable));
    assert_eq!(
        "approved".parse::<Resolution>(),
        Err(DomainError::InvalidResolution(String::from("approved")))
    );
    assert_eq!(Resolution::Inapplicable.state(), ReportState::Inapplicable);
}

#[test]
fn test_resolved_states_carry_their_resolution() {
    assert_eq!(
        ReportState::Applicable.resolution(),
        Some(Resolution::Applicable)
    );
    assert_eq!(
        Resolution::Inapplicable.state().resolution(),
        Some(Resolution::Inapplicable)
    );
    assert_eq!(ReportState::Assigned.resolution(), None);
    assert_eq!(ReportState::Approved.resolution(), None);
}
