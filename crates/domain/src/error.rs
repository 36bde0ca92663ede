// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::state::{ReportState, Transition};

/// Errors that can occur while parsing or checking domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The string is not a known report state.
    InvalidReportState(String),
    /// The string is not `applicable` or `inapplicable`.
    InvalidResolution(String),
    /// The transition is not legal from the current state.
    IllegalTransition {
        /// The state the report was in.
        from: ReportState,
        /// The transition that was attempted.
        transition: Transition,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidReportState(state) => write!(f, "Invalid report state: '{state}'"),
            Self::InvalidResolution(value) => write!(
                f,
                "Invalid resolution: '{value}'. Must be 'applicable' or 'inapplicable'"
            ),
            Self::IllegalTransition { from, transition } => {
                write!(f, "Cannot {transition} a report in state '{from}'")
            }
        }
    }
}

impl std::error::Error for DomainError {}
