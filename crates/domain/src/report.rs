// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The report entity and its transition methods.
//!
//! Every transition method behaves like a guarded save: it clears the
//! previous errors, runs the attribute rules, checks the transition table,
//! and only then moves the state and stamps the matching timestamp. A
//! refused transition leaves `state` and every timestamp untouched and
//! explains itself in [`Report::errors`].

use crate::error_list::{ErrorKind, ErrorList, Field};
use crate::state::{ReportState, Resolution, Transition};
use crate::validation::validate_report;
use serde::{Deserialize, Serialize};
use std::num::ParseIntError;
use std::str::FromStr;
use time::OffsetDateTime;

/// Identifier of a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(u64);

impl ReportId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ReportId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl FromStr for ReportId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim_start_matches('#').parse().map(Self)
    }
}

/// Identifier of a DDFIP office (guichet).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OfficeId(u64);

impl OfficeId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for OfficeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OfficeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Attributes a caller may set on a report before a transition.
///
/// Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportAttributes {
    /// The office the report is assigned to.
    pub office_id: Option<OfficeId>,
    /// The DDFIP response.
    pub reponse: Option<String>,
    /// The motif given with a resolution.
    pub resolution_motif: Option<String>,
}

impl ReportAttributes {
    /// Creates an empty attribute set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn with_office(mut self, office_id: OfficeId) -> Self {
        self.office_id = Some(office_id);
        self
    }

    #[must_use]
    pub fn with_reponse(mut self, reponse: impl Into<String>) -> Self {
        self.reponse = Some(reponse.into());
        self
    }

    #[must_use]
    pub fn with_resolution_motif(mut self, motif: impl Into<String>) -> Self {
        self.resolution_motif = Some(motif.into());
        self
    }

    /// Returns a copy without the office, for operations that take the
    /// office as a separate argument.
    #[must_use]
    pub fn without_office(&self) -> Self {
        Self {
            office_id: None,
            ..self.clone()
        }
    }

    /// Returns true if no attribute is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.office_id.is_none() && self.reponse.is_none() && self.resolution_motif.is_none()
    }
}

/// A property-tax anomaly report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    id: ReportId,
    #[serde(default)]
    state: ReportState,
    #[serde(default)]
    office_id: Option<OfficeId>,
    #[serde(default)]
    reponse: Option<String>,
    #[serde(default)]
    resolution_motif: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    accepted_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    assigned_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    resolved_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    approved_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    canceled_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    rejected_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    denied_at: Option<OffsetDateTime>,
    #[serde(skip)]
    errors: ErrorList,
}

impl Report {
    /// Creates a new draft report.
    #[must_use]
    pub const fn new(id: ReportId) -> Self {
        Self::with_state(id, ReportState::Draft)
    }

    /// Creates a report already in `state`, as loaded from storage.
    #[must_use]
    pub const fn with_state(id: ReportId, state: ReportState) -> Self {
        Self {
            id,
            state,
            office_id: None,
            reponse: None,
            resolution_motif: None,
            accepted_at: None,
            assigned_at: None,
            resolved_at: None,
            approved_at: None,
            canceled_at: None,
            rejected_at: None,
            denied_at: None,
            errors: ErrorList::new(),
        }
    }

    #[must_use]
    pub const fn id(&self) -> ReportId {
        self.id
    }

    #[must_use]
    pub const fn state(&self) -> ReportState {
        self.state
    }

    #[must_use]
    pub const fn office_id(&self) -> Option<OfficeId> {
        self.office_id
    }

    #[must_use]
    pub fn reponse(&self) -> Option<&str> {
        self.reponse.as_deref()
    }

    #[must_use]
    pub fn resolution_motif(&self) -> Option<&str> {
        self.resolution_motif.as_deref()
    }

    #[must_use]
    pub const fn accepted_at(&self) -> Option<OffsetDateTime> {
        self.accepted_at
    }

    #[must_use]
    pub const fn assigned_at(&self) -> Option<OffsetDateTime> {
        self.assigned_at
    }

    #[must_use]
    pub const fn resolved_at(&self) -> Option<OffsetDateTime> {
        self.resolved_at
    }

    #[must_use]
    pub const fn approved_at(&self) -> Option<OffsetDateTime> {
        self.approved_at
    }

    #[must_use]
    pub const fn canceled_at(&self) -> Option<OffsetDateTime> {
        self.canceled_at
    }

    #[must_use]
    pub const fn rejected_at(&self) -> Option<OffsetDateTime> {
        self.rejected_at
    }

    #[must_use]
    pub const fn denied_at(&self) -> Option<OffsetDateTime> {
        self.denied_at
    }

    /// The errors from the last validation or transition attempt.
    #[must_use]
    pub const fn errors(&self) -> &ErrorList {
        &self.errors
    }

    pub const fn errors_mut(&mut self) -> &mut ErrorList {
        &mut self.errors
    }

    /// Writes the supplied attributes. No validation is run.
    pub fn assign_attributes(&mut self, attributes: &ReportAttributes) {
        if let Some(office_id) = attributes.office_id {
            self.office_id = Some(office_id);
        }
        if let Some(reponse) = &attributes.reponse {
            self.reponse = Some(reponse.clone());
        }
        if let Some(motif) = &attributes.resolution_motif {
            self.resolution_motif = Some(motif.clone());
        }
    }

    /// Replaces the errors with the result of the attribute rules.
    pub fn validate(&mut self) {
        self.errors = validate_report(self);
    }

    /// Runs [`validate`](Self::validate) and reports whether it found nothing.
    pub fn is_valid(&mut self) -> bool {
        self.validate();
        self.errors.is_empty()
    }

    /// Accepts the report for review.
    ///
    /// Returns true if the report transitioned.
    pub fn accept(&mut self) -> bool {
        self.apply(Transition::Accept)
    }

    pub fn undo_acceptance(&mut self) -> bool {
        self.apply(Transition::UndoAcceptance)
    }

    /// Assigns the report to its office.
    ///
    /// Refused with a blank error on `office_id` if no office is set.
    pub fn assign(&mut self) -> bool {
        self.validate();
        if self.office_id.is_none() {
            self.errors.add(Field::OfficeId, ErrorKind::Blank);
        }
        self.errors.is_empty() && self.apply_checked(Transition::Assign)
    }

    pub fn undo_assignment(&mut self) -> bool {
        self.apply(Transition::UndoAssignment)
    }

    /// Records the office's resolution.
    pub fn resolve(&mut self, resolution: Resolution) -> bool {
        self.apply(Transition::Resolve(resolution))
    }

    pub fn undo_resolution(&mut self) -> bool {
        self.apply(Transition::UndoResolution)
    }

    /// Confirms the office's resolution: applicable reports are approved,
    /// inapplicable ones canceled.
    pub fn confirm(&mut self) -> bool {
        self.apply(Transition::Confirm)
    }

    pub fn reject(&mut self) -> bool {
        self.apply(Transition::Reject)
    }

    pub fn undo_rejection(&mut self) -> bool {
        self.apply(Transition::UndoRejection)
    }

    /// Validates, then applies `transition` if the report is valid.
    fn apply(&mut self, transition: Transition) -> bool {
        self.validate();
        self.errors.is_empty() && self.apply_checked(transition)
    }

    /// Applies `transition` if the current state allows it, otherwise
    /// records the refusal on `state`.
    fn apply_checked(&mut self, transition: Transition) -> bool {
        let Some(next) = self.state.transition(transition) else {
            self.errors.add(
                Field::State,
                ErrorKind::InvalidTransition {
                    from: self.state,
                    transition,
                },
            );
            return false;
        };

        let next: ReportState = self.restored_state(transition, next);
        self.stamp(transition, OffsetDateTime::now_utc());
        self.state = next;
        true
    }

    /// The table sends undone rejections and acceptances back to
    /// `acknowledged`. A report rejected after acceptance returns to
    /// `accepted`, and an acceptance that lifted a denial returns to `denied`.
    const fn restored_state(&self, transition: Transition, next: ReportState) -> ReportState {
        match transition {
            Transition::UndoRejection if self.accepted_at.is_some() => ReportState::Accepted,
            Transition::UndoAcceptance if self.denied_at.is_some() => ReportState::Denied,
            _ => next,
        }
    }

    fn stamp(&mut self, transition: Transition, now: OffsetDateTime) {
        match transition {
            Transition::Accept => self.accepted_at = Some(now),
            Transition::UndoAcceptance => self.accepted_at = None,
            Transition::Assign => self.assigned_at = Some(now),
            Transition::UndoAssignment => {
                self.assigned_at = None;
                self.office_id = None;
            }
            Transition::Resolve(_) => self.resolved_at = Some(now),
            Transition::UndoResolution => {
                self.resolved_at = None;
                self.resolution_motif = None;
            }
            Transition::Confirm => match self.state {
                ReportState::Inapplicable => self.canceled_at = Some(now),
                _ => self.approved_at = Some(now),
            },
            Transition::Reject => self.rejected_at = Some(now),
            Transition::UndoRejection => {
                self.rejected_at = None;
                self.reponse = None;
            }
        }
    }
}
