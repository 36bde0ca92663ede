// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use signalements_domain::{ErrorList, OfficeId, ReportAttributes, Resolution};

/// A set of reports that can be transitioned together.
///
/// Every operation is atomic across the whole set: either every report
/// transitions, or none does and the returned errors say why.
pub trait ReportCollection {
    /// Accepts every report.
    ///
    /// # Errors
    ///
    /// Returns the errors of the reports that could not be accepted.
    fn accept_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList>;

    /// Assigns every report to `office_id`.
    ///
    /// # Errors
    ///
    /// Returns the errors of the reports that could not be assigned.
    fn assign_all(
        &mut self,
        office_id: OfficeId,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList>;

    /// Confirms the resolution of every report.
    ///
    /// # Errors
    ///
    /// Returns the errors of the reports that could not be confirmed.
    fn confirm_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList>;

    /// Rejects every report.
    ///
    /// # Errors
    ///
    /// Returns the errors of the reports that could not be rejected.
    fn reject_all(&mut self, attributes: &ReportAttributes) -> Result<(), ErrorList>;

    /// Resolves every report with `resolution`.
    ///
    /// # Errors
    ///
    /// Returns the errors of the reports that could not be resolved.
    fn resolve_all(
        &mut self,
        resolution: Resolution,
        attributes: &ReportAttributes,
    ) -> Result<(), ErrorList>;
}
