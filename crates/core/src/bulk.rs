// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk transition services.
//!
//! A bulk service validates its own parameters through a form and, only if
//! they are valid, hands the whole operation to the collection. Individual
//! reports are never inspected here.

use crate::collection::ReportCollection;
use crate::forms::{AcceptAllForm, AssignAllForm, ReponseForm, ResolveAllForm};
use crate::result::ServiceResult;
use signalements_domain::{ErrorList, ReportAttributes};
use tracing::{debug, info};

/// Wraps the outcome of a collection operation.
fn conclude<'c, C>(
    reports: &'c C,
    operation: &'static str,
    outcome: Result<(), ErrorList>,
) -> ServiceResult<&'c C> {
    match outcome {
        Ok(()) => {
            info!(operation, "bulk transition applied");
            ServiceResult::Success(reports)
        }
        Err(errors) => {
            debug!(operation, errors = %errors, "bulk transition refused by collection");
            ServiceResult::from_errors(reports, errors)
        }
    }
}

/// Reports form errors without touching the collection.
fn refuse<'c, C>(operation: &'static str, errors: ErrorList) -> ServiceResult<&'c C> {
    debug!(operation, errors = %errors, "bulk parameters invalid");
    ServiceResult::Failure(errors)
}

/// Accepts every report of a collection.
#[derive(Debug)]
pub struct AcceptAllService<'a, C: ReportCollection> {
    reports: &'a mut C,
}

impl<'a, C: ReportCollection> AcceptAllService<'a, C> {
    #[must_use]
    pub const fn new(reports: &'a mut C) -> Self {
        Self { reports }
    }

    pub fn accept(&mut self, attributes: &ReportAttributes) -> ServiceResult<&C> {
        let errors: ErrorList = AcceptAllForm::from_attributes(attributes).validate();
        if !errors.is_empty() {
            return refuse("accept_all", errors);
        }

        let outcome = self.reports.accept_all(attributes);
        conclude(&*self.reports, "accept_all", outcome)
    }
}

/// Assigns every report of a collection to one office.
#[derive(Debug)]
pub struct AssignAllService<'a, C: ReportCollection> {
    reports: &'a mut C,
}

impl<'a, C: ReportCollection> AssignAllService<'a, C> {
    #[must_use]
    pub const fn new(reports: &'a mut C) -> Self {
        Self { reports }
    }

    /// Requires `office_id` in `attributes`.
    pub fn assign(&mut self, attributes: &ReportAttributes) -> ServiceResult<&C> {
        let form: AssignAllForm = AssignAllForm::from_attributes(attributes);
        let errors: ErrorList = form.validate();
        let Some(office_id) = form.office_id.filter(|_| errors.is_empty()) else {
            return refuse("assign_all", errors);
        };

        let outcome = self
            .reports
            .assign_all(office_id, &attributes.without_office());
        conclude(&*self.reports, "assign_all", outcome)
    }
}

/// Confirms the resolution of every report of a collection.
#[derive(Debug)]
pub struct ConfirmAllService<'a, C: ReportCollection> {
    reports: &'a mut C,
}

impl<'a, C: ReportCollection> ConfirmAllService<'a, C> {
    #[must_use]
    pub const fn new(reports: &'a mut C) -> Self {
        Self { reports }
    }

    pub fn confirm(&mut self, attributes: &ReportAttributes) -> ServiceResult<&C> {
        let errors: ErrorList = ReponseForm::from_attributes(attributes).validate();
        if !errors.is_empty() {
            return refuse("confirm_all", errors);
        }

        let outcome = self.reports.confirm_all(attributes);
        conclude(&*self.reports, "confirm_all", outcome)
    }
}

/// Rejects every report of a collection.
#[derive(Debug)]
pub struct RejectAllService<'a, C: ReportCollection> {
    reports: &'a mut C,
}

impl<'a, C: ReportCollection> RejectAllService<'a, C> {
    #[must_use]
    pub const fn new(reports: &'a mut C) -> Self {
        Self { reports }
    }

    pub fn reject(&mut self, attributes: &ReportAttributes) -> ServiceResult<&C> {
        let errors: ErrorList = ReponseForm::from_attributes(attributes).validate();
        if !errors.is_empty() {
            return refuse("reject_all", errors);
        }

        let outcome = self.reports.reject_all(attributes);
        conclude(&*self.reports, "reject_all", outcome)
    }
}

/// Resolves every report of a collection the same way.
#[derive(Debug)]
pub struct ResolveAllService<'a, C: ReportCollection> {
    reports: &'a mut C,
}

impl<'a, C: ReportCollection> ResolveAllService<'a, C> {
    #[must_use]
    pub const fn new(reports: &'a mut C) -> Self {
        Self { reports }
    }

    /// `state` must be `applicable` or `inapplicable`.
    pub fn resolve(&mut self, state: &str, attributes: &ReportAttributes) -> ServiceResult<&C> {
        let form: ResolveAllForm = ResolveAllForm::new(state, attributes);
        let errors: ErrorList = form.validate();
        let Some(resolution) = form.resolution().filter(|_| errors.is_empty()) else {
            return refuse("resolve_all", errors);
        };

        let outcome = self.reports.resolve_all(resolution, attributes);
        conclude(&*self.reports, "resolve_all", outcome)
    }
}
