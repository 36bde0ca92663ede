// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! All-or-nothing transitions over a selection of stored reports.

use crate::store::{Contents, InMemoryReportStore, StoredReport, commit};
use signalements::ReportCollection;
use signalements_audit::{Action, Actor, Cause};
use signalements_domain::{
    ErrorList, OfficeId, Report, ReportAttributes, ReportId, Resolution, Transition,
};
use tracing::{debug, info};

/// A selection of stored reports that transition together.
///
/// Each operation works on copies of the selected reports while holding the
/// store lock. The copies are written back only if every one of them
/// transitioned; otherwise the store is left as it was and the returned
/// errors name the reports that refused.
#[derive(Debug)]
pub struct ReportBatch<'s> {
    store: &'s InMemoryReportStore,
    ids: Vec<ReportId>,
    actor: Actor,
    cause: Cause,
}

impl<'s> ReportBatch<'s> {
    pub(crate) const fn new(
        store: &'s InMemoryReportStore,
        ids: Vec<ReportId>,
        actor: Actor,
        cause: Cause,
    ) -> Self {
        Self {
            store,
            ids,
            actor,
            cause,
        }
    }

    /// The selected report IDs, sorted.
    #[must_use]
    pub fn ids(&self) -> &[ReportId] {
        &self.ids
    }

    /// Returns the current stored copies of the selected reports.
    #[must_use]
    pub fn reports(&self) -> Vec<StoredReport> {
        self.store
            .contents()
            .reports
            .iter()
            .filter(|(id, _)| self.ids.contains(*id))
            .map(|(_, stored)| stored.clone())
            .collect()
    }

    fn apply_all<F>(&self, transition: Transition, mut step: F) -> Result<(), ErrorList>
    where
        F: FnMut(&mut Report) -> bool,
    {
        let mut guard = self.store.contents();
        let Contents { reports, events } = &mut *guard;

        let mut selected: Vec<(&mut StoredReport, Report)> = reports
            .iter_mut()
            .filter(|(id, _)| self.ids.contains(*id))
            .map(|(_, stored)| {
                let candidate: Report = stored.report.clone();
                (stored, candidate)
            })
            .collect();

        let mut errors: ErrorList = ErrorList::new();
        for (_, candidate) in &mut selected {
            if !step(candidate) {
                errors.merge_for(candidate.id(), candidate.errors());
            }
        }

        if !errors.is_empty() {
            debug!(
                transition = %transition,
                reports = self.ids.len(),
                errors = %errors,
                "batch refused, nothing written"
            );
            return Err(errors);
        }

        let action: Action = Action::for_transition(transition);
        for (stored, candidate) in selected {
            commit(stored, candidate, events, &action, &self.actor, &self.cause);
        }

        info!(
            transition = %transition,
            reports = self.ids.len(),
            actor = %self.actor.id,
            "batch committed"
        );
        Ok(())
    }
}

impl ReportCollection for ReportBatch<'_> {
    fn accept_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.apply_all(Transition::Accept, |report| {
            report.assign_attributes(attributes);
            report.accept()
        })
    }

    fn assign_all(
        &mut self,
        office_id: OfficeId,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList> {
        let attributes: ReportAttributes = attributes.clone().with_office(office_id);
        self.apply_all(Transition::Assign, |report| {
            report.assign_attributes(&attributes);
            report.assign()
        })
    }

    fn confirm_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.apply_all(Transition::Confirm, |report| {
            report.assign_attributes(attributes);
            report.confirm()
        })
    }

    fn reject_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList> {
        self.apply_all(Transition::Reject, |report| {
            report.assign_attributes(attributes);
            report.reject()
        })
    }

    fn resolve_all(
        &mut self,
        resolution: Resolution,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList> {
        self.apply_all(Transition::Resolve(resolution), |report| {
            report.assign_attributes(attributes);
            report.resolve(resolution)
        })
    }
}
