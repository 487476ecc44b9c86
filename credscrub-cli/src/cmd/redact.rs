use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, OutputFormat};
use crate::utils::{build_redactor, read_inputs};
use crate::{OutputArgs, RedactorArgs};

#[derive(Serialize)]
struct RedactSummary<'a> {
    input: &'a str,
    replacements: usize,
}

pub fn redact_cmd(
    paths: &[PathBuf],
    out: Option<&Path>,
    in_place: bool,
    verbose: bool,
    output: OutputArgs,
    redactor_args: RedactorArgs,
) -> i32 {
    if in_place && paths.is_empty() {
        print_error(output.format, output.quiet, "--in-place requires at least one path");
        return exit_codes::RUNTIME_ERROR;
    }

    let redactor = match build_redactor(&redactor_args) {
        Ok(r) => r,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };
    let inputs = match read_inputs(paths) {
        Ok(v) => v,
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            return exit_codes::RUNTIME_ERROR;
        }
    };

    let mut combined = String::new();
    for input in &inputs {
        let redaction = redactor.redact(&input.text);
        if verbose && !output.quiet {
            print_summary(
                output.format,
                &RedactSummary {
                    input: &input.label,
                    replacements: redaction.replacements(),
                },
            );
        }

        match (&input.path, in_place) {
            (Some(path), true) => {
                if let Err(e) = std::fs::write(path, &redaction.text) {
                    print_error(
                        output.format,
                        output.quiet,
                        &format!("failed to write {}: {e}", path.display()),
                    );
                    return exit_codes::RUNTIME_ERROR;
                }
            }
            _ => combined.push_str(&redaction.text),
        }
    }

    if in_place {
        return exit_codes::SUCCESS;
    }

    let written = match out {
        Some(path) => std::fs::write(path, &combined).map_err(|e| (path.display().to_string(), e)),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(combined.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| ("<stdout>".to_string(), e))
        }
    };
    match written {
        Ok(()) => exit_codes::SUCCESS,
        Err((target, e)) => {
            print_error(output.format, output.quiet, &format!("failed to write {target}: {e}"));
            exit_codes::RUNTIME_ERROR
        }
    }
}

// Summaries go to stderr so they never mix with the redacted text on stdout.
fn print_summary(format: OutputFormat, summary: &RedactSummary<'_>) {
    match format {
        OutputFormat::Text => eprintln!("{}: {} replacements", summary.input, summary.replacements),
        OutputFormat::Json => {
            if let Ok(json) = serde_json::to_string(summary) {
                eprintln!("{json}");
            }
        }
    }
}
