//! CLI module — Clap argument parser, output helpers, and the export command.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;

/// pass2keepass: export a pass password store to a KeePass 2 CSV file.
#[derive(Parser)]
#[command(
    name = "pass2keepass",
    about = "Export pass entries to a KeePass 2 CSV file",
    version
)]
pub struct Cli {
    /// The CSV file to write to
    pub output_file: PathBuf,
}
