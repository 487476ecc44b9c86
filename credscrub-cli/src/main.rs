#![forbid(unsafe_code)]

use clap::Parser;

mod args;
mod cmd;
mod commands;
mod exit_codes;
mod output;
mod utils;

pub use args::*;
use commands::Command;

#[derive(Debug, Parser)]
#[command(name = "credscrub", version, about = "Scrub credentials out of logs and command output")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = run_command(cli.command);
    std::process::exit(exit_code);
}

fn run_command(command: Command) -> i32 {
    match command {
        Command::Redact {
            paths,
            out,
            in_place,
            verbose,
            output,
            redactor,
        } => cmd::redact::redact_cmd(&paths, out.as_deref(), in_place, verbose, output, redactor),
        Command::Scan {
            paths,
            output,
            redactor,
        } => cmd::scan::scan_cmd(&paths, output, redactor),
        Command::Config { output, redactor } => cmd::config::config_cmd(output, redactor),
    }
}
