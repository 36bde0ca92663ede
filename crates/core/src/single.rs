// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Single-report transition services.
//!
//! Each service wraps one report and runs, in this order: attribute
//! assignment, validation (plus the service's own preconditions), the
//! transition itself, and result construction. The transition is only
//! attempted when the previous steps left no error.

use crate::error::CoreError;
use crate::result::ServiceResult;
use signalements_domain::{
    ErrorKind, ErrorList, Field, Report, ReportAttributes, ReportState, Resolution,
};
use tracing::{debug, info, warn};

/// Rebuilds `errors` from the report and wraps the outcome.
fn conclude<'r>(
    errors: &mut ErrorList,
    report: &'r Report,
    operation: &'static str,
    from: ReportState,
) -> ServiceResult<&'r Report> {
    errors.clear();
    errors.merge(report.errors());

    if errors.is_empty() {
        info!(
            report_id = %report.id(),
            operation,
            from = %from,
            to = %report.state(),
            "report transitioned"
        );
    } else {
        debug!(
            report_id = %report.id(),
            operation,
            state = %report.state(),
            errors = %errors,
            "report transition refused"
        );
    }

    ServiceResult::from_errors(report, errors.clone())
}

/// Accepts a transmitted report for review.
#[derive(Debug)]
pub struct AcceptService<'a> {
    report: &'a mut Report,
    errors: ErrorList,
}

impl<'a> AcceptService<'a> {
    #[must_use]
    pub const fn new(report: &'a mut Report) -> Self {
        Self {
            report,
            errors: ErrorList::new(),
        }
    }

    /// Writes `attributes`, validates, and accepts the report if valid.
    pub fn accept(&mut self, attributes: &ReportAttributes) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.assign_attributes(attributes);
        self.report.validate();

        if self.report.errors().is_empty() {
            self.report.accept();
        }

        conclude(&mut self.errors, &*self.report, "accept", from)
    }

    /// Returns an accepted report to the acknowledged state.
    pub fn undo(&mut self) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.undo_acceptance();
        conclude(&mut self.errors, &*self.report, "undo_acceptance", from)
    }
}

/// Assigns an accepted report to an office.
#[derive(Debug)]
pub struct AssignService<'a> {
    report: &'a mut Report,
    errors: ErrorList,
}

impl<'a> AssignService<'a> {
    #[must_use]
    pub const fn new(report: &'a mut Report) -> Self {
        Self {
            report,
            errors: ErrorList::new(),
        }
    }

    /// Writes `attributes`, validates, requires an office, and assigns the
    /// report if nothing is wrong.
    pub fn assign(&mut self, attributes: &ReportAttributes) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.assign_attributes(attributes);
        self.report.validate();

        if self.report.office_id().is_none() {
            self.report
                .errors_mut()
                .add(Field::OfficeId, ErrorKind::Blank);
        }

        if self.report.errors().is_empty() {
            self.report.assign();
        }

        conclude(&mut self.errors, &*self.report, "assign", from)
    }

    /// Returns an assigned report to the accepted state.
    pub fn undo(&mut self) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.undo_assignment();
        conclude(&mut self.errors, &*self.report, "undo_assignment", from)
    }
}

/// Confirms the resolution given by an office.
#[derive(Debug)]
pub struct ConfirmService<'a> {
    report: &'a mut Report,
    errors: ErrorList,
}

impl<'a> ConfirmService<'a> {
    #[must_use]
    pub const fn new(report: &'a mut Report) -> Self {
        Self {
            report,
            errors: ErrorList::new(),
        }
    }

    /// Writes `attributes`, validates, and confirms the report if valid.
    pub fn confirm(&mut self, attributes: &ReportAttributes) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.assign_attributes(attributes);
        self.report.validate();

        if self.report.errors().is_empty() {
            self.report.confirm();
        }

        conclude(&mut self.errors, &*self.report, "confirm", from)
    }

    /// A confirmation cannot be undone.
    ///
    /// # Errors
    ///
    /// Always returns `CoreError::UnsupportedOperation`; the report is not
    /// touched.
    pub fn undo(&mut self) -> Result<ServiceResult<&Report>, CoreError> {
        warn!(report_id = %self.report.id(), "undo of a confirmation requested");
        Err(CoreError::UnsupportedOperation {
            operation: "undo_confirmation",
            report_id: self.report.id(),
        })
    }
}

/// Rejects a report.
#[derive(Debug)]
pub struct RejectService<'a> {
    report: &'a mut Report,
    errors: ErrorList,
}

impl<'a> RejectService<'a> {
    #[must_use]
    pub const fn new(report: &'a mut Report) -> Self {
        Self {
            report,
            errors: ErrorList::new(),
        }
    }

    /// Writes `attributes` and rejects the report if it is valid.
    pub fn reject(&mut self, attributes: &ReportAttributes) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.assign_attributes(attributes);

        if self.report.is_valid() {
            self.report.reject();
        }

        conclude(&mut self.errors, &*self.report, "reject", from)
    }

    /// Returns a rejected report to the acknowledged state.
    pub fn undo(&mut self) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.undo_rejection();
        conclude(&mut self.errors, &*self.report, "undo_rejection", from)
    }
}

/// Records the resolution an office gives to an assigned report.
#[derive(Debug)]
pub struct ResolveService<'a> {
    report: &'a mut Report,
    errors: ErrorList,
}

impl<'a> ResolveService<'a> {
    #[must_use]
    pub const fn new(report: &'a mut Report) -> Self {
        Self {
            report,
            errors: ErrorList::new(),
        }
    }

    /// Writes `attributes`, validates, checks that `state` names a
    /// resolution, and resolves the report if nothing is wrong.
    pub fn resolve(
        &mut self,
        state: &str,
        attributes: &ReportAttributes,
    ) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.assign_attributes(attributes);
        self.report.validate();

        let resolution: Option<Resolution> = state.parse().ok();
        if resolution.is_none() {
            self.report.errors_mut().add(
                Field::State,
                ErrorKind::Inclusion {
                    allowed: Resolution::VALUES,
                },
            );
        }

        if let (Some(resolution), true) = (resolution, self.report.errors().is_empty()) {
            self.report.resolve(resolution);
        }

        conclude(&mut self.errors, &*self.report, "resolve", from)
    }

    /// Returns a resolved report to the assigned state.
    pub fn undo(&mut self) -> ServiceResult<&Report> {
        let from: ReportState = self.report.state();
        self.report.undo_resolution();
        conclude(&mut self.errors, &*self.report, "undo_resolution", from)
    }
}
