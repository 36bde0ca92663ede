// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signalements_domain::ReportId;

/// Errors that can occur during persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersistenceError {
    /// The requested report was not found.
    ReportNotFound(ReportId),
    /// A report with the same ID is already stored.
    DuplicateReport(ReportId),
    /// The report was written by someone else since it was loaded.
    StaleReport {
        report_id: ReportId,
        expected: u64,
        actual: u64,
    },
    /// A batch was requested without any report.
    EmptyBatch,
    /// The store lock was poisoned by a panicking writer.
    LockPoisoned,
    /// Reading or writing the store file failed.
    IoError(String),
    /// Serialization/deserialization error.
    SerializationError(String),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ReportNotFound(id) => write!(f, "Report not found: {id}"),
            Self::DuplicateReport(id) => write!(f, "Report already stored: {id}"),
            Self::StaleReport {
                report_id,
                expected,
                actual,
            } => write!(
                f,
                "Report {report_id} was modified concurrently: expected version {expected}, found {actual}"
            ),
            Self::EmptyBatch => write!(f, "A batch needs at least one report"),
            Self::LockPoisoned => write!(f, "Report store lock poisoned"),
            Self::IoError(msg) => write!(f, "I/O error: {msg}"),
            Self::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for PersistenceError {}

impl From<std::io::Error> for PersistenceError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PersistenceError {
    fn from(_: std::sync::PoisonError<T>) -> Self {
        Self::LockPoisoned
    }
}
