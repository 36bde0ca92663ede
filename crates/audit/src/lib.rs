// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use serde::{Deserialize, Serialize};
use signalements_domain::{OfficeId, Report, ReportId, ReportState, Transition};
use time::OffsetDateTime;

#[cfg(test)]
mod tests;

/// Represents the entity performing an action.
///
/// An actor is any identifiable entity that initiates a state change:
/// a DDFIP user, an office user, or an automated process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The type of actor (e.g., "user", "system", "cli").
    pub actor_type: String,
}

impl Actor {
    /// Creates a new Actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `actor_type` - The type of actor
    #[must_use]
    pub const fn new(id: String, actor_type: String) -> Self {
        Self { id, actor_type }
    }
}

/// Represents the reason or trigger for an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    /// A unique identifier for this cause (e.g., request ID, job ID).
    pub id: String,
    /// A description of the cause.
    pub description: String,
}

impl Cause {
    /// Creates a new Cause.
    #[must_use]
    pub const fn new(id: String, description: String) -> Self {
        Self { id, description }
    }
}

/// Represents the specific action performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    /// The name of the action (e.g., "accept", "undo_assignment").
    pub name: String,
    /// Optional additional details about the action.
    pub details: Option<String>,
}

impl Action {
    /// Creates a new Action.
    #[must_use]
    pub const fn new(name: String, details: Option<String>) -> Self {
        Self { name, details }
    }

    /// Describes a committed transition.
    #[must_use]
    pub fn for_transition(transition: Transition) -> Self {
        let details: Option<String> = match transition {
            Transition::Resolve(resolution) => Some(format!("resolution={resolution}")),
            _ => None,
        };
        Self::new(transition.name().to_string(), details)
    }
}

/// The audited part of a report at a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// The lifecycle state.
    pub state: ReportState,
    /// The office the report was assigned to, if any.
    pub office_id: Option<OfficeId>,
}

impl StateSnapshot {
    /// Creates a new `StateSnapshot`.
    #[must_use]
    pub const fn new(state: ReportState, office_id: Option<OfficeId>) -> Self {
        Self { state, office_id }
    }

    /// Captures the audited fields of `report`.
    #[must_use]
    pub const fn of(report: &Report) -> Self {
        Self::new(report.state(), report.office_id())
    }
}

/// An immutable audit event representing a committed report transition.
///
/// Every transition written to storage produces exactly one audit event,
/// capturing who, why, what, and the report before and after.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The event ID, assigned when the event is stored.
    pub event_id: Option<u64>,
    /// The report that transitioned.
    pub report_id: ReportId,
    /// The actor who initiated this state change.
    pub actor: Actor,
    /// The cause or reason for this state change.
    pub cause: Cause,
    /// The action that was performed.
    pub action: Action,
    /// The report before the transition.
    pub before: StateSnapshot,
    /// The report after the transition.
    pub after: StateSnapshot,
    /// When the event was recorded.
    #[serde(with = "time::serde::rfc3339")]
    pub occurred_at: OffsetDateTime,
}

impl AuditEvent {
    /// Creates a new `AuditEvent`, stamped now.
    ///
    /// Once created, an audit event is immutable.
    ///
    /// # Arguments
    ///
    /// * `report_id` - The report that transitioned
    /// * `actor` - The actor who initiated the change
    /// * `cause` - The reason for the change
    /// * `action` - The action that was performed
    /// * `before` - The report before the transition
    /// * `after` - The report after the transition
    #[must_use]
    pub fn new(
        report_id: ReportId,
        actor: Actor,
        cause: Cause,
        action: Action,
        before: StateSnapshot,
        after: StateSnapshot,
    ) -> Self {
        Self {
            event_id: None,
            report_id,
            actor,
            cause,
            action,
            before,
            after,
            occurred_at: OffsetDateTime::now_utc(),
        }
    }

    /// Returns a copy of this event carrying its storage ID.
    #[must_use]
    pub fn with_event_id(self, event_id: u64) -> Self {
        Self {
            event_id: Some(event_id),
            ..self
        }
    }
}
