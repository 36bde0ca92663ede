// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runs a parsed command against a store.
//!
//! A transition on one report goes through the single-report service and a
//! version-checked save. A transition on several reports goes through the
//! bulk service over a [`ReportBatch`].

use crate::args::{Command, UndoStep};
use color_eyre::Result;
use serde_json::Value;
use signalements::{
    AcceptAllService, AcceptService, AssignAllService, AssignService, ConfirmAllService,
    ConfirmService, CoreError, RejectAllService, RejectService, ResolveAllService,
    ResolveService, ServiceResult,
};
use signalements_audit::{Action, Actor, Cause};
use signalements_domain::{Report, ReportAttributes, ReportId, Transition};
use signalements_persistence::{InMemoryReportStore, ReportBatch, StoredReport};
use tracing::debug;

/// The JSON printed by a command, and whether the command succeeded.
#[derive(Debug)]
pub struct Outcome {
    pub success: bool,
    pub output: Value,
}

impl Outcome {
    fn printed(output: Value) -> Self {
        Self {
            success: true,
            output,
        }
    }

    fn of<T: serde::Serialize>(result: &ServiceResult<T>) -> Result<Self> {
        Ok(Self {
            success: result.is_success(),
            output: serde_json::to_value(result)?,
        })
    }
}

/// Who runs the commands, against which store.
pub struct Session<'s> {
    store: &'s InMemoryReportStore,
    actor: Actor,
    cause: Cause,
}

impl<'s> Session<'s> {
    pub const fn new(store: &'s InMemoryReportStore, actor: Actor, cause: Cause) -> Self {
        Self {
            store,
            actor,
            cause,
        }
    }

    pub fn execute(&self, command: &Command) -> Result<Outcome> {
        let attributes: ReportAttributes = command.attributes();
        debug!(command = command.name(), "executing");

        match command {
            Command::Show { ids } => self.show(ids),
            Command::History { id } => {
                let events = match id {
                    Some(id) => self.store.events_for(*id),
                    None => self.store.events(),
                };
                Ok(Outcome::printed(serde_json::to_value(events)?))
            }
            Command::Create { id, state } => {
                self.store.insert(Report::with_state(*id, *state))?;
                Ok(Outcome::printed(serde_json::to_value(self.store.load(*id)?)?))
            }
            Command::Accept { ids } => match ids.as_slice() {
                [id] => self.single(*id, |report| {
                    Ok(AcceptService::new(report)
                        .accept(&attributes)
                        .map(|_| Action::for_transition(Transition::Accept)))
                }),
                _ => self.bulk(ids, |batch| {
                    AcceptAllService::new(batch)
                        .accept(&attributes)
                        .map(ReportBatch::reports)
                }),
            },
            Command::Assign { ids, .. } => match ids.as_slice() {
                [id] => self.single(*id, |report| {
                    Ok(AssignService::new(report)
                        .assign(&attributes)
                        .map(|_| Action::for_transition(Transition::Assign)))
                }),
                _ => self.bulk(ids, |batch| {
                    AssignAllService::new(batch)
                        .assign(&attributes)
                        .map(ReportBatch::reports)
                }),
            },
            Command::Confirm { ids, .. } => match ids.as_slice() {
                [id] => self.single(*id, |report| {
                    Ok(ConfirmService::new(report)
                        .confirm(&attributes)
                        .map(|_| Action::for_transition(Transition::Confirm)))
                }),
                _ => self.bulk(ids, |batch| {
                    ConfirmAllService::new(batch)
                        .confirm(&attributes)
                        .map(ReportBatch::reports)
                }),
            },
            Command::Reject { ids, .. } => match ids.as_slice() {
                [id] => self.single(*id, |report| {
                    Ok(RejectService::new(report)
                        .reject(&attributes)
                        .map(|_| Action::for_transition(Transition::Reject)))
                }),
                _ => self.bulk(ids, |batch| {
                    RejectAllService::new(batch)
                        .reject(&attributes)
                        .map(ReportBatch::reports)
                }),
            },
            Command::Resolve { state, ids, .. } => match ids.as_slice() {
                [id] => self.single(*id, |report| {
                    Ok(ResolveService::new(report)
                        .resolve(state, &attributes)
                        .map(|resolved| {
                            resolved.state().resolution().map_or_else(
                                || Action::new(String::from("resolve"), None),
                                |resolution| {
                                    Action::for_transition(Transition::Resolve(resolution))
                                },
                            )
                        }))
                }),
                _ => self.bulk(ids, |batch| {
                    ResolveAllService::new(batch)
                        .resolve(state, &attributes)
                        .map(ReportBatch::reports)
                }),
            },
            Command::Undo { step, id } => self.undo(*step, *id),
        }
    }

    fn show(&self, ids: &[ReportId]) -> Result<Outcome> {
        let reports: Vec<StoredReport> = if ids.is_empty() {
            self.store.reports()
        } else {
            ids.iter()
                .map(|id| self.store.load(*id))
                .collect::<Result<_, _>>()?
        };
        Ok(Outcome::printed(serde_json::to_value(reports)?))
    }

    fn undo(&self, step: UndoStep, id: ReportId) -> Result<Outcome> {
        self.single(id, |report| {
            let (result, transition) = match step {
                UndoStep::Acceptance => (
                    AcceptService::new(report).undo().map(|_| ()),
                    Transition::UndoAcceptance,
                ),
                UndoStep::Assignment => (
                    AssignService::new(report).undo().map(|_| ()),
                    Transition::UndoAssignment,
                ),
                UndoStep::Rejection => (
                    RejectService::new(report).undo().map(|_| ()),
                    Transition::UndoRejection,
                ),
                UndoStep::Resolution => (
                    ResolveService::new(report).undo().map(|_| ()),
                    Transition::UndoResolution,
                ),
                UndoStep::Confirmation => {
                    return ConfirmService::new(report).undo().map(|result| {
                        result.map(|_| Action::new(String::from("undo_confirmation"), None))
                    });
                }
            };
            Ok(result.map(|()| Action::for_transition(transition)))
        })
    }

    /// Loads one report, runs `run` on a copy and saves the copy if the
    /// service succeeded.
    fn single<F>(&self, id: ReportId, run: F) -> Result<Outcome>
    where
        F: FnOnce(&mut Report) -> Result<ServiceResult<Action>, CoreError>,
    {
        let stored: StoredReport = self.store.load(id)?;
        let mut report: Report = stored.report;

        let result: ServiceResult<StoredReport> = match run(&mut report)? {
            ServiceResult::Success(action) => {
                let version: u64 = self.store.save(
                    report.clone(),
                    stored.version,
                    &action,
                    &self.actor,
                    &self.cause,
                )?;
                ServiceResult::Success(StoredReport { report, version })
            }
            ServiceResult::Failure(errors) => ServiceResult::Failure(errors),
        };

        Outcome::of(&result)
    }

    /// Runs `run` over a batch of the given reports.
    fn bulk<F>(&self, ids: &[ReportId], run: F) -> Result<Outcome>
    where
        F: FnOnce(&mut ReportBatch<'s>) -> ServiceResult<Vec<StoredReport>>,
    {
        let mut batch: ReportBatch<'s> =
            self.store
                .batch(ids, self.actor.clone(), self.cause.clone())?;
        Outcome::of(&run(&mut batch))
    }
}
