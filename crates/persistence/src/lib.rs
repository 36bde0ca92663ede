// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Storage for reports under review.
//!
//! Reports are held in memory with a per-report version, and can be read
//! from and written to a JSON file between runs. Two write paths exist:
//!
//! - [`InMemoryReportStore::save`] writes one report with a version check,
//!   so two flows that loaded the same version cannot both commit.
//! - [`ReportBatch`] implements `ReportCollection`; a bulk transition either
//!   commits for every selected report or for none of them.
//!
//! Both paths append an audit event for every report whose state or office
//! changed.

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
#![allow(clippy::multiple_crate_versions)]

mod batch;
mod error;
mod store;

#[cfg(test)]
mod tests;

pub use batch::ReportBatch;
pub use error::PersistenceError;
pub use store::{InMemoryReportStore, StoredReport};
