use std::path::PathBuf;

use credscrub_core::Finding;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result, OutputFormat};
use crate::utils::{build_redactor, read_inputs};
use crate::{OutputArgs, RedactorArgs};

#[derive(Serialize)]
struct InputReport {
    input: String,
    findings: Vec<Finding>,
}

#[derive(Serialize)]
struct ScanReport {
    total: usize,
    inputs: Vec<InputReport>,
}

pub fn scan_cmd(paths: &[PathBuf], output: OutputArgs, redactor_args: RedactorArgs) -> i32 {
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

    let reports: Vec<InputReport> = inputs
        .into_iter()
        .map(|input| InputReport {
            findings: redactor.redact(&input.text).findings,
            input: input.label,
        })
        .collect();
    let report = ScanReport {
        total: reports.iter().map(|r| r.findings.len()).sum(),
        inputs: reports,
    };

    if output.format == OutputFormat::Text && !output.quiet {
        for r in &report.inputs {
            for f in &r.findings {
                println!(
                    "{}:{} {} {} {} {}",
                    r.input,
                    f.line,
                    f.kind.as_str(),
                    f.scheme.as_deref().unwrap_or("-"),
                    f.host.as_deref().filter(|h| !h.is_empty()).unwrap_or("-"),
                    f.fingerprint
                );
            }
        }
        if report.total == 0 {
            println!("ok: no secrets found");
        } else {
            println!(
                "{} secret(s) found in {} input(s)",
                report.total,
                report.inputs.iter().filter(|r| !r.findings.is_empty()).count()
            );
        }
    } else {
        print_result(output.format, output.quiet, &report);
    }

    if report.total == 0 {
        exit_codes::SUCCESS
    } else {
        exit_codes::SECRETS_FOUND
    }
}
