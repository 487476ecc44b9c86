use std::path::PathBuf;

use clap::Subcommand;

use crate::args::*;

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Write a redacted copy of each input (stdin when no path is given).
    Redact {
        paths: Vec<PathBuf>,
        #[arg(long = "output", value_name = "FILE", conflicts_with = "in_place")]
        out: Option<PathBuf>,
        #[arg(long)]
        in_place: bool,
        #[arg(long, short)]
        verbose: bool,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        redactor: RedactorArgs,
    },
    /// Report secrets without rewriting anything; exits 2 when any are found.
    Scan {
        paths: Vec<PathBuf>,
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        redactor: RedactorArgs,
    },
    /// Print the effective configuration.
    Config {
        #[command(flatten)]
        output: OutputArgs,
        #[command(flatten)]
        redactor: RedactorArgs,
    },
}
