// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use signalements_domain::{OfficeId, ReportAttributes, ReportId, ReportState};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

#[derive(Debug, Parser)]
#[command(name = "signalements", author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON report store. A missing file starts an empty store.
    #[arg(short, long, default_value = "reports.json", global = true)]
    pub store: PathBuf,

    /// Identifier recorded as the actor of every transition
    #[arg(short, long, default_value = "cli", global = true)]
    pub actor: String,

    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
pub enum Command {
    /// Print stored reports, all of them when no ID is given
    Show { ids: Vec<ReportId> },

    /// Print the audit log, optionally for one report
    History { id: Option<ReportId> },

    /// Add a report to the store
    Create {
        id: ReportId,

        #[arg(long, default_value_t = ReportState::Transmitted)]
        state: ReportState,
    },

    /// Accept reports for review
    Accept {
        #[arg(required = true)]
        ids: Vec<ReportId>,
    },

    /// Assign reports to an office
    Assign {
        #[arg(long)]
        office: Option<OfficeId>,

        #[arg(long)]
        reponse: Option<String>,

        #[arg(required = true)]
        ids: Vec<ReportId>,
    },

    /// Confirm the resolution given by the office
    Confirm {
        #[arg(long)]
        reponse: Option<String>,

        #[arg(required = true)]
        ids: Vec<ReportId>,
    },

    /// Reject reports
    Reject {
        #[arg(long)]
        reponse: Option<String>,

        #[arg(required = true)]
        ids: Vec<ReportId>,
    },

    /// Record the office's resolution: applicable or inapplicable
    Resolve {
        state: String,

        #[arg(long)]
        motif: Option<String>,

        #[arg(required = true)]
        ids: Vec<ReportId>,
    },

    /// Revert the last step taken on one report
    Undo { step: UndoStep, id: ReportId },
}

impl Command {
    /// Whether a successful run must be written back to the store file.
    pub const fn is_mutating(&self) -> bool {
        !matches!(self, Self::Show { .. } | Self::History { .. })
    }

    pub const fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::History { .. } => "history",
            Self::Create { .. } => "create",
            Self::Accept { .. } => "accept",
            Self::Assign { .. } => "assign",
            Self::Confirm { .. } => "confirm",
            Self::Reject { .. } => "reject",
            Self::Resolve { .. } => "resolve",
            Self::Undo { .. } => "undo",
        }
    }

    /// The report attributes carried by the command's options.
    pub fn attributes(&self) -> ReportAttributes {
        let mut attributes: ReportAttributes = ReportAttributes::new();
        match self {
            Self::Assign {
                office, reponse, ..
            } => {
                attributes.office_id = *office;
                attributes.reponse.clone_from(reponse);
            }
            Self::Confirm { reponse, .. } | Self::Reject { reponse, .. } => {
                attributes.reponse.clone_from(reponse);
            }
            Self::Resolve { motif, .. } => {
                attributes.resolution_motif.clone_from(motif);
            }
            _ => {}
        }
        attributes
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UndoStep {
    Acceptance,
    Assignment,
    Rejection,
    Resolution,
    Confirmation,
}
