// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Field-keyed validation errors.
//!
//! An [`ErrorList`] is the collection every validation rule, precondition
//! check and refused transition writes into. It keeps insertion order and
//! allows several errors on the same field.

use crate::report::ReportId;
use crate::state::{ReportState, Transition};
use serde::Serialize;

/// The attribute an error is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The record as a whole.
    Base,
    State,
    OfficeId,
    Reponse,
    ResolutionMotif,
}

impl Field {
    /// Returns the attribute name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::State => "state",
            Self::OfficeId => "office_id",
            Self::Reponse => "reponse",
            Self::ResolutionMotif => "resolution_motif",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What is wrong with a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ErrorKind {
    /// A required value is missing or empty.
    Blank,
    /// The value is not one of the allowed values.
    Inclusion {
        /// The allowed values.
        allowed: &'static [&'static str],
    },
    /// The value exceeds the maximum length.
    TooLong {
        /// The maximum number of characters.
        maximum: usize,
    },
    /// The report refused the transition from its current state.
    InvalidTransition {
        /// The state the report was in.
        from: ReportState,
        /// The transition that was attempted.
        transition: Transition,
    },
}

impl ErrorKind {
    /// Returns the human-readable message for this error.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Blank => String::from("can't be blank"),
            Self::Inclusion { allowed } => {
                format!("is not included in the list ({})", allowed.join(", "))
            }
            Self::TooLong { maximum } => {
                format!("is too long (maximum is {maximum} characters)")
            }
            Self::InvalidTransition { from, transition } => {
                format!("cannot {transition} from '{from}'")
            }
        }
    }
}

/// A single error entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorEntry {
    /// The report this error belongs to, when collected across several reports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_id: Option<ReportId>,
    /// The attribute the error is attached to.
    pub field: Field,
    /// The error itself.
    #[serde(flatten)]
    pub kind: ErrorKind,
}

impl ErrorEntry {
    /// Returns the message prefixed with the field name (and report, if any).
    #[must_use]
    pub fn full_message(&self) -> String {
        let message: String = match self.field {
            Field::Base => self.kind.message(),
            field => format!("{field} {}", self.kind.message()),
        };
        match self.report_id {
            Some(report_id) => format!("report {report_id}: {message}"),
            None => message,
        }
    }
}

/// An ordered, field-keyed multi-map of errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ErrorList {
    entries: Vec<ErrorEntry>,
}

impl ErrorList {
    /// Creates an empty error list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds an error on `field`.
    pub fn add(&mut self, field: Field, kind: ErrorKind) {
        self.entries.push(ErrorEntry {
            report_id: None,
            field,
            kind,
        });
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Appends every error of `other`, keeping their report attribution.
    pub fn merge(&mut self, other: &Self) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Appends every error of `other`, attributed to `report_id`.
    pub fn merge_for(&mut self, report_id: ReportId, other: &Self) {
        self.entries
            .extend(other.entries.iter().cloned().map(|entry| ErrorEntry {
                report_id: Some(report_id),
                ..entry
            }));
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates over every entry, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ErrorEntry> {
        self.entries.iter()
    }

    /// Returns the errors attached to `field`, regardless of report.
    #[must_use]
    pub fn get(&self, field: Field) -> Vec<&ErrorKind> {
        self.entries
            .iter()
            .filter(|entry| entry.field == field)
            .map(|entry| &entry.kind)
            .collect()
    }

    /// Returns true if `field` carries exactly this error.
    #[must_use]
    pub fn contains(&self, field: Field, kind: &ErrorKind) -> bool {
        self.entries
            .iter()
            .any(|entry| entry.field == field && &entry.kind == kind)
    }

    /// Returns true if any entry is a refused transition rather than a
    /// validation failure.
    #[must_use]
    pub fn has_invalid_transition(&self) -> bool {
        self.entries
            .iter()
            .any(|entry| matches!(entry.kind, ErrorKind::InvalidTransition { .. }))
    }

    /// Returns every message, prefixed with its field name.
    #[must_use]
    pub fn full_messages(&self) -> Vec<String> {
        self.entries.iter().map(ErrorEntry::full_message).collect()
    }
}

impl std::fmt::Display for ErrorList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_messages().join("; "))
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a ErrorEntry;
    type IntoIter = std::slice::Iter<'a, ErrorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
