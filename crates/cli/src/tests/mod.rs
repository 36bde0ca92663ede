// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::unwrap_used, clippy::expect_used)]


use crate::args::Args;
use clap::Parser;

pub fn parse(argv: &[&str]) -> Args {
    Args::try_parse_from(std::iter::once("signalements").chain(argv.iter().copied()))
        .expect("valid command line")
}
