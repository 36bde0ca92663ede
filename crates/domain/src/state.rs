// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report lifecycle states and the review transition table.
//!
//! The collectivity side of the workflow (`draft` through `transmitted`) is
//! listed for completeness. Review transitions are only ever driven by the
//! DDFIP side, and the table in [`ReportState::transition`] is the single
//! place deciding which of them are legal.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Lifecycle state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportState {
    /// Being written by the collectivity.
    #[default]
    Draft,
    /// Complete, waiting to be packed into a transmission.
    Ready,
    /// Part of a transmission that has not been sent yet.
    InActiveTransmission,
    /// Sent to the DDFIP.
    Transmitted,
    /// Seen by the DDFIP.
    Acknowledged,
    /// Accepted for review by the DDFIP.
    Accepted,
    /// Assigned to an office.
    Assigned,
    /// The office found the report applicable.
    Applicable,
    /// The office found the report inapplicable.
    Inapplicable,
    /// Applicable resolution confirmed by the DDFIP.
    Approved,
    /// Rejected by the DDFIP.
    Rejected,
    /// Denied by the DDFIP.
    Denied,
    /// Inapplicable resolution confirmed by the DDFIP.
    Canceled,
}

impl ReportState {
    /// Every state, in workflow order.
    pub const ALL: [Self; 13] = [
        Self::Draft,
        Self::Ready,
        Self::InActiveTransmission,
        Self::Transmitted,
        Self::Acknowledged,
        Self::Accepted,
        Self::Assigned,
        Self::Applicable,
        Self::Inapplicable,
        Self::Approved,
        Self::Rejected,
        Self::Denied,
        Self::Canceled,
    ];

    /// Returns the string representation of the state.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Ready => "ready",
            Self::InActiveTransmission => "in_active_transmission",
            Self::Transmitted => "transmitted",
            Self::Acknowledged => "acknowledged",
            Self::Accepted => "accepted",
            Self::Assigned => "assigned",
            Self::Applicable => "applicable",
            Self::Inapplicable => "inapplicable",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Denied => "denied",
            Self::Canceled => "canceled",
        }
    }

    /// Returns the state reached by applying `transition`, or `None` if the
    /// transition is not legal from this state.
    ///
    /// Undoing a rejection or an acceptance lands on `acknowledged` here;
    /// [`Report`](crate::Report) refines that from its timestamps.
    #[must_use]
    pub const fn transition(self, transition: Transition) -> Option<Self> {
        match (self, transition) {
            (Self::Transmitted | Self::Acknowledged | Self::Denied, Transition::Accept) => {
                Some(Self::Accepted)
            }
            (Self::Accepted, Transition::UndoAcceptance)
            | (Self::Rejected, Transition::UndoRejection) => Some(Self::Acknowledged),
            (Self::Accepted | Self::Assigned, Transition::Assign)
            | (Self::Applicable | Self::Inapplicable, Transition::UndoResolution) => {
                Some(Self::Assigned)
            }
            (Self::Assigned, Transition::UndoAssignment) => Some(Self::Accepted),
            (
                Self::Assigned | Self::Applicable | Self::Inapplicable,
                Transition::Resolve(resolution),
            ) => Some(resolution.state()),
            (Self::Applicable, Transition::Confirm) => Some(Self::Approved),
            (Self::Inapplicable, Transition::Confirm) => Some(Self::Canceled),
            (Self::Transmitted | Self::Acknowledged | Self::Accepted, Transition::Reject) => {
                Some(Self::Rejected)
            }
            _ => None,
        }
    }

    /// Returns the resolution a resolved report carries, if any.
    #[must_use]
    pub const fn resolution(&self) -> Option<Resolution> {
        match self {
            Self::Applicable => Some(Resolution::Applicable),
            Self::Inapplicable => Some(Resolution::Inapplicable),
            _ => None,
        }
    }

    /// Like [`transition`](Self::transition), but reports an illegal
    /// transition as an error.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IllegalTransition` if `transition` cannot be
    /// applied from this state.
    pub fn checked_transition(self, transition: Transition) -> Result<Self, DomainError> {
        self.transition(transition)
            .ok_or_else(|| DomainError::IllegalTransition {
                from: self,
                transition,
            })
    }

    /// Returns the review transitions that are legal from this state.
    #[must_use]
    pub fn available_transitions(&self) -> Vec<Transition> {
        Transition::ALL
            .into_iter()
            .filter(|transition| self.transition(*transition).is_some())
            .collect()
    }

    /// Parses a state from its string representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReportState` if the string is not a valid state.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DomainError::InvalidReportState(s.to_string()))
    }
}

impl FromStr for ReportState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

impl std::fmt::Display for ReportState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome an office gives to an assigned report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resolution {
    /// The anomaly is confirmed.
    Applicable,
    /// The anomaly is not confirmed.
    Inapplicable,
}

impl Resolution {
    /// The accepted string values, in the order they are offered.
    pub const VALUES: &'static [&'static str] = &["applicable", "inapplicable"];

    /// Returns the string representation of the resolution.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Applicable => "applicable",
            Self::Inapplicable => "inapplicable",
        }
    }

    /// Returns the report state this resolution leads to.
    #[must_use]
    pub const fn state(&self) -> ReportState {
        match self {
            Self::Applicable => ReportState::Applicable,
            Self::Inapplicable => ReportState::Inapplicable,
        }
    }
}

impl FromStr for Resolution {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "applicable" => Ok(Self::Applicable),
            "inapplicable" => Ok(Self::Inapplicable),
            _ => Err(DomainError::InvalidResolution(s.to_string())),
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A review operation that changes the state of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transition {
    Accept,
    UndoAcceptance,
    Assign,
    UndoAssignment,
    Resolve(Resolution),
    UndoResolution,
    Confirm,
    Reject,
    UndoRejection,
}

impl Transition {
    /// Every transition, with both resolutions expanded.
    pub const ALL: [Self; 10] = [
        Self::Accept,
        Self::UndoAcceptance,
        Self::Assign,
        Self::UndoAssignment,
        Self::Resolve(Resolution::Applicable),
        Self::Resolve(Resolution::Inapplicable),
        Self::UndoResolution,
        Self::Confirm,
        Self::Reject,
        Self::UndoRejection,
    ];

    /// Returns the name of the transition, as recorded in audit events.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::UndoAcceptance => "undo_acceptance",
            Self::Assign => "assign",
            Self::UndoAssignment => "undo_assignment",
            Self::Resolve(_) => "resolve",
            Self::UndoResolution => "undo_resolution",
            Self::Confirm => "confirm",
            Self::Reject => "reject",
            Self::UndoRejection => "undo_rejection",
        }
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolve(resolution) => write!(f, "resolve({resolution})"),
            _ => f.write_str(self.name()),
        }
    }
}
