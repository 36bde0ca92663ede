// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # signalements
//!
//! Drives the review of reports stored in a JSON file.
//!
//! ```text
//! signalements create 12 --state transmitted
//! signalements accept 12
//! signalements assign --office 4 12 13 14
//! signalements resolve applicable --motif "Surface erronée" 12
//! signalements undo resolution 12
//! ```
//!
//! Results are printed as JSON on stdout, logs go to stderr. A refused
//! transition exits with status 1 and leaves the file untouched.

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

mod args;
mod commands;

#[cfg(test)]
mod tests;

use args::Args;
use clap::Parser;
use color_eyre::{Result, eyre::Context};
use commands::{Outcome, Session};
use signalements_audit::{Actor, Cause};
use signalements_persistence::InMemoryReportStore;

fn main() -> Result<()> {
    color_eyre::install()?;
    let args: Args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .with_writer(std::io::stderr)
        .without_time()
        .init();

    match run(&args) {
        Ok(true) => (),
        Ok(false) => std::process::exit(1),
        Err(err) => {
            tracing::error!("{err:#}");
            std::process::exit(1);
        }
    }
    Ok(())
}

/// Runs the command and prints its output. Returns whether it succeeded.
fn run(args: &Args) -> Result<bool> {
    let store: InMemoryReportStore = InMemoryReportStore::load_json(&args.store)
        .wrap_err_with(|| format!("loading {}", args.store.display()))?;
    let actor: Actor = Actor::new(args.actor.clone(), String::from("operator"));
    let cause: Cause = Cause::new(
        String::from("cli"),
        format!("signalements {}", args.command.name()),
    );

    let outcome: Outcome = Session::new(&store, actor, cause).execute(&args.command)?;
    println!("{}", serde_json::to_string_pretty(&outcome.output)?);

    if outcome.success && args.command.is_mutating() {
        store
            .save_json(&args.store)
            .wrap_err_with(|| format!("writing {}", args.store.display()))?;
    }
    Ok(outcome.success)
}
