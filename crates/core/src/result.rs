// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::Serialize;
use signalements_domain::ErrorList;

/// The outcome of a service call.
///
/// Built once at the end of the call and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "data", rename_all = "snake_case")]
pub enum ServiceResult<T> {
    /// The call succeeded; carries the record it operated on.
    Success(T),
    /// The call failed; carries a non-empty error list.
    Failure(ErrorList),
}

impl<T> ServiceResult<T> {
    /// Builds `Success(record)` if `errors` is empty, `Failure(errors)` otherwise.
    #[must_use]
    pub fn from_errors(record: T, errors: ErrorList) -> Self {
        if errors.is_empty() {
            Self::Success(record)
        } else {
            Self::Failure(errors)
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the record of a success.
    #[must_use]
    pub const fn record(&self) -> Option<&T> {
        match self {
            Self::Success(record) => Some(record),
            Self::Failure(_) => None,
        }
    }

    /// Returns the errors of a failure.
    #[must_use]
    pub const fn errors(&self) -> Option<&ErrorList> {
        match self {
            Self::Success(_) => None,
            Self::Failure(errors) => Some(errors),
        }
    }

    /// Maps the record of a success, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> ServiceResult<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(record) => ServiceResult::Success(f(record)),
            Self::Failure(errors) => ServiceResult::Failure(errors),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Errors
    ///
    /// Returns the error list of a failure.
    pub fn into_result(self) -> Result<T, ErrorList> {
        match self {
            Self::Success(record) => Ok(record),
            Self::Failure(errors) => Err(errors),
        }
    }
}

impl<T> From<ServiceResult<T>> for Result<T, ErrorList> {
    fn from(result: ServiceResult<T>) -> Self {
        result.into_result()
    }
}
