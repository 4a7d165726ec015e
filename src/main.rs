//! Command-line driver for the `singly` linked list.
//!
//! Runs operation scripts against a list and hosts the reference self-test.

use clap::Parser;

mod cli;
use cli::Cli;

fn main() -> anyhow::Result<()> {
    Cli::parse().run()
}
