//! CLI entry point for the all-colors growth tool

use allcolors::io::cli::{Cli, GrowthRunner};
use clap::Parser;

fn main() -> allcolors::Result<()> {
    let cli = Cli::parse();
    GrowthRunner::new(cli).run().map(|_| ())
}
