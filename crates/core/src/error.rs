// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signalements_domain::ReportId;
use thiserror::Error;

/// Errors a service raises instead of returning a `ServiceResult`.
///
/// Validation and transition failures are never reported here; they are
/// carried by `ServiceResult::Failure`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    /// The operation has no defined behavior.
    #[error("Unsupported operation '{operation}' on report {report_id}")]
    UnsupportedOperation {
        /// The operation that was requested.
        operation: &'static str,
        /// The report it was requested on.
        report_id: ReportId,
    },
}
