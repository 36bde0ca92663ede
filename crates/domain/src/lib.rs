// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod error;
mod error_list;
mod report;
mod state;
mod validation;

#[cfg(test)]
mod tests;

pub use error::DomainError;
pub use error_list::{ErrorEntry, ErrorKind, ErrorList, Field};
pub use report::{OfficeId, Report, ReportAttributes, ReportId};
pub use state::{ReportState, Resolution, Transition};
pub use validation::{
    REPONSE_MAX_LENGTH, RESOLUTION_MOTIF_MAX_LENGTH, validate_report, validate_text,
};
