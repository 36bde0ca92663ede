// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error_list::{ErrorKind, ErrorList, Field};
use crate::report::Report;

/// Maximum length of the DDFIP response to a report.
pub const REPONSE_MAX_LENGTH: usize = 10_000;

/// Maximum length of the motif given with a resolution.
pub const RESOLUTION_MOTIF_MAX_LENGTH: usize = 255;

/// Validates an optional free-text attribute.
///
/// A missing value is valid. A present value must contain something other
/// than whitespace and must not exceed `maximum` characters.
///
/// # Arguments
///
/// * `field` - The attribute the errors are attached to
/// * `value` - The value to check
/// * `maximum` - The maximum number of characters
/// * `errors` - Where errors are written
pub fn validate_text(field: Field, value: Option<&str>, maximum: usize, errors: &mut ErrorList) {
    let Some(value) = value else {
        return;
    };

    if value.trim().is_empty() {
        errors.add(field, ErrorKind::Blank);
    }

    if value.chars().count() > maximum {
        errors.add(field, ErrorKind::TooLong { maximum });
    }
}

/// Runs the report's own attribute rules.
///
/// Transition preconditions (predecessor state, office presence) are not
/// checked here; they belong to the transition methods.
///
/// # Returns
///
/// The errors found, empty if the report is valid.
#[must_use]
pub fn validate_report(report: &Report) -> ErrorList {
    let mut errors: ErrorList = ErrorList::new();

    validate_text(
        Field::Reponse,
        report.reponse(),
        REPONSE_MAX_LENGTH,
        &mut errors,
    );
    validate_text(
        Field::ResolutionMotif,
        report.resolution_motif(),
        RESOLUTION_MOTIF_MAX_LENGTH,
        &mut errors,
    );

    errors
}
