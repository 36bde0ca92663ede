// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Versioned in-memory report storage.
//!
//! Every stored report carries a version that is bumped on each write. A
//! single-report flow loads a report together with its version and hands
//! both back to [`InMemoryReportStore::save`], which refuses the write if
//! anyone else committed in between. Each committed change to the audited
//! fields appends one [`AuditEvent`].

use crate::batch::ReportBatch;
use crate::error::PersistenceError;
use serde::{Deserialize, Serialize};
use signalements_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use signalements_domain::{Report, ReportId};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};
use tracing::{debug, info, warn};

/// A report as held by the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredReport {
    pub report: Report,
    /// Number of writes since the report was inserted.
    pub version: u64,
}

#[derive(Debug, Default)]
pub struct Contents {
    pub reports: BTreeMap<ReportId, StoredReport>,
    pub events: Vec<AuditEvent>,
}

/// On-disk layout of a store.
#[derive(Debug, Default, Serialize, Deserialize)]
struct StoreFile {
    #[serde(default)]
    reports: Vec<StoredReport>,
    #[serde(default)]
    events: Vec<AuditEvent>,
}

/// Writes `report` over `stored`, bumps the version and records an audit
/// event if the audited fields changed. Returns the new version.
pub fn commit(
    stored: &mut StoredReport,
    report: Report,
    events: &mut Vec<AuditEvent>,
    action: &Action,
    actor: &Actor,
    cause: &Cause,
) -> u64 {
    let before: StateSnapshot = StateSnapshot::of(&stored.report);
    let after: StateSnapshot = StateSnapshot::of(&report);

    if before != after {
        let event_id: u64 = events.len() as u64 + 1;
        events.push(
            AuditEvent::new(
                report.id(),
                actor.clone(),
                cause.clone(),
                action.clone(),
                before,
                after,
            )
            .with_event_id(event_id),
        );
    }

    stored.report = report;
    stored.version += 1;
    stored.version
}

/// Thread-safe store of reports and their audit log.
#[derive(Debug, Default)]
pub struct InMemoryReportStore {
    contents: Mutex<Contents>,
}

impl InMemoryReportStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Locks the store.
    ///
    /// Writes are only applied once every check has passed, so the data is
    /// consistent even if a previous holder panicked.
    pub(crate) fn contents(&self) -> MutexGuard<'_, Contents> {
        self.contents.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Adds a new report at version 0.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::DuplicateReport` if the ID is already used.
    pub fn insert(&self, report: Report) -> Result<(), PersistenceError> {
        let mut contents = self.contents();
        let report_id: ReportId = report.id();
        if contents.reports.contains_key(&report_id) {
            return Err(PersistenceError::DuplicateReport(report_id));
        }

        debug!(report_id = %report_id, state = %report.state(), "report inserted");
        contents
            .reports
            .insert(report_id, StoredReport { report, version: 0 });
        Ok(())
    }

    /// Returns a copy of a stored report with its current version.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReportNotFound` if there is no such report.
    pub fn load(&self, report_id: ReportId) -> Result<StoredReport, PersistenceError> {
        self.contents()
            .reports
            .get(&report_id)
            .cloned()
            .ok_or(PersistenceError::ReportNotFound(report_id))
    }

    /// Writes `report` if the stored version is still `expected_version`.
    ///
    /// Returns the new version.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::ReportNotFound` if the report was never
    /// inserted, or `PersistenceError::StaleReport` if another write
    /// happened since `expected_version` was loaded.
    pub fn save(
        &self,
        report: Report,
        expected_version: u64,
        action: &Action,
        actor: &Actor,
        cause: &Cause,
    ) -> Result<u64, PersistenceError> {
        let mut guard = self.contents();
        let Contents { reports, events } = &mut *guard;
        let report_id: ReportId = report.id();
        let stored: &mut StoredReport = reports
            .get_mut(&report_id)
            .ok_or(PersistenceError::ReportNotFound(report_id))?;

        if stored.version != expected_version {
            warn!(
                report_id = %report_id,
                expected = expected_version,
                actual = stored.version,
                "refusing stale report write"
            );
            return Err(PersistenceError::StaleReport {
                report_id,
                expected: expected_version,
                actual: stored.version,
            });
        }

        let version: u64 = commit(stored, report, events, action, actor, cause);
        drop(guard);
        info!(report_id = %report_id, version, action = %action.name, "report saved");
        Ok(version)
    }

    /// Selects reports for a bulk transition.
    ///
    /// Duplicate IDs are collapsed.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::EmptyBatch` if `ids` is empty, or
    /// `PersistenceError::ReportNotFound` for the first unknown ID.
    pub fn batch(
        &self,
        ids: &[ReportId],
        actor: Actor,
        cause: Cause,
    ) -> Result<ReportBatch<'_>, PersistenceError> {
        if ids.is_empty() {
            return Err(PersistenceError::EmptyBatch);
        }

        let contents = self.contents();
        if let Some(missing) = ids.iter().find(|id| !contents.reports.contains_key(*id)) {
            return Err(PersistenceError::ReportNotFound(*missing));
        }
        drop(contents);

        let mut ids: Vec<ReportId> = ids.to_vec();
        ids.sort_unstable();
        ids.dedup();
        Ok(ReportBatch::new(self, ids, actor, cause))
    }

    /// Returns every stored report, ordered by ID.
    #[must_use]
    pub fn reports(&self) -> Vec<StoredReport> {
        self.contents().reports.values().cloned().collect()
    }

    /// Returns the stored report IDs in order.
    #[must_use]
    pub fn ids(&self) -> Vec<ReportId> {
        self.contents().reports.keys().copied().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contents().reports.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents().reports.is_empty()
    }

    /// Returns the whole audit log, oldest first.
    #[must_use]
    pub fn events(&self) -> Vec<AuditEvent> {
        self.contents().events.clone()
    }

    /// Returns the audit events of one report, oldest first.
    #[must_use]
    pub fn events_for(&self, report_id: ReportId) -> Vec<AuditEvent> {
        self.contents()
            .events
            .iter()
            .filter(|event| event.report_id == report_id)
            .cloned()
            .collect()
    }

    /// Reads a store from a JSON file. A missing file gives an empty store.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if it holds
    /// the same report twice.
    pub fn load_json(path: &Path) -> Result<Self, PersistenceError> {
        let file: StoreFile = match std::fs::read_to_string(path) {
            Ok(text) => serde_json::from_str(&text)?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "store file missing, starting empty");
                StoreFile::default()
            }
            Err(err) => return Err(err.into()),
        };

        let store: Self = Self::new();
        {
            let mut contents = store.contents();
            for stored in file.reports {
                let report_id: ReportId = stored.report.id();
                if contents.reports.insert(report_id, stored).is_some() {
                    return Err(PersistenceError::DuplicateReport(report_id));
                }
            }
            contents.events = file.events;
        }

        info!(path = %path.display(), reports = store.len(), "store loaded");
        Ok(store)
    }

    /// Writes the store to a JSON file, replacing it.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be serialized or written.
    pub fn save_json(&self, path: &Path) -> Result<(), PersistenceError> {
        let file: StoreFile = {
            let contents = self.contents();
            StoreFile {
                reports: contents.reports.values().cloned().collect(),
                events: contents.events.clone(),
            }
        };

        std::fs::write(path, serde_json::to_string_pretty(&file)?)?;
        debug!(path = %path.display(), reports = file.reports.len(), "store written");
        Ok(())
    }
}
