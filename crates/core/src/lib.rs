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

mod bulk;
mod collection;
mod error;
mod forms;
mod result;
mod single;

#[cfg(test)]
mod tests;

pub use bulk::{
    AcceptAllService, AssignAllService, ConfirmAllService, RejectAllService, ResolveAllService,
};
pub use collection::ReportCollection;
pub use error::CoreError;
pub use forms::{AcceptAllForm, AssignAllForm, ReponseForm, ResolveAllForm};
pub use result::ServiceResult;
pub use single::{AcceptService, AssignService, ConfirmService, RejectService, ResolveService};
