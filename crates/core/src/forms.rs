// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bulk-level attribute validation.
//!
//! These forms validate the parameters of a bulk operation before any
//! report of the collection is touched. They never look at the reports.

use signalements_domain::{
    ErrorKind, ErrorList, Field, OfficeId, REPONSE_MAX_LENGTH, RESOLUTION_MOTIF_MAX_LENGTH,
    ReportAttributes, Resolution, validate_text,
};

/// Parameters of a bulk acceptance. There are no required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcceptAllForm;

impl AcceptAllForm {
    #[must_use]
    pub const fn from_attributes(_attributes: &ReportAttributes) -> Self {
        Self
    }

    #[must_use]
    pub const fn validate(&self) -> ErrorList {
        ErrorList::new()
    }
}

/// Parameters of a bulk assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AssignAllForm {
    pub office_id: Option<OfficeId>,
}

impl AssignAllForm {
    #[must_use]
    pub const fn from_attributes(attributes: &ReportAttributes) -> Self {
        Self {
            office_id: attributes.office_id,
        }
    }

    /// The office is required.
    #[must_use]
    pub fn validate(&self) -> ErrorList {
        let mut errors: ErrorList = ErrorList::new();
        if self.office_id.is_none() {
            errors.add(Field::OfficeId, ErrorKind::Blank);
        }
        errors
    }
}

/// Parameters of a bulk confirmation or rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReponseForm {
    pub reponse: Option<String>,
}

impl ReponseForm {
    #[must_use]
    pub fn from_attributes(attributes: &ReportAttributes) -> Self {
        Self {
            reponse: attributes.reponse.clone(),
        }
    }

    /// The response is optional but bounded.
    #[must_use]
    pub fn validate(&self) -> ErrorList {
        let mut errors: ErrorList = ErrorList::new();
        validate_text(
            Field::Reponse,
            self.reponse.as_deref(),
            REPONSE_MAX_LENGTH,
            &mut errors,
        );
        errors
    }
}

/// Parameters of a bulk resolution.
///
/// `state` is kept as the raw value supplied by the caller so that an
/// unknown value can be reported as an inclusion error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveAllForm {
    pub state: Option<String>,
    pub resolution_motif: Option<String>,
}

impl ResolveAllForm {
    #[must_use]
    pub fn new(state: &str, attributes: &ReportAttributes) -> Self {
        Self {
            state: Some(state.to_string()),
            resolution_motif: attributes.resolution_motif.clone(),
        }
    }

    /// Returns the resolution named by `state`, if it is one.
    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        self.state.as_deref()?.parse().ok()
    }

    /// `state` must be present and one of the resolutions; the motif is
    /// optional but bounded.
    #[must_use]
    pub fn validate(&self) -> ErrorList {
        let mut errors: ErrorList = ErrorList::new();

        match self.state.as_deref().map(str::trim) {
            None | Some("") => errors.add(Field::State, ErrorKind::Blank),
            Some(_) if self.resolution().is_none() => errors.add(
                Field::State,
                ErrorKind::Inclusion {
                    allowed: Resolution::VALUES,
                },
            ),
            Some(_) => {}
        }

        validate_text(
            Field::ResolutionMotif,
            self.resolution_motif.as_deref(),
            RESOLUTION_MOTIF_MAX_LENGTH,
            &mut errors,
        );

        errors
    }
}
