use credscrub_core::RedactorConfig;
use serde::Serialize;

use crate::exit_codes;
use crate::output::{print_error, print_result};
use crate::utils::{load_config, redactor_from_config};
use crate::{OutputArgs, RedactorArgs};

#[derive(Serialize)]
struct EffectiveConfig {
    #[serde(flatten)]
    config: RedactorConfig,
    /// Count only; values are never printed.
    known_secrets: usize,
}

pub fn config_cmd(output: OutputArgs, redactor_args: RedactorArgs) -> i32 {
    let loaded = load_config(&redactor_args).and_then(|config| {
        let redactor = redactor_from_config(&config, &redactor_args)?;
        Ok(EffectiveConfig {
            config,
            known_secrets: redactor.known_secret_count(),
        })
    });

    match loaded {
        Ok(effective) => {
            print_result(output.format, output.quiet, &effective);
            exit_codes::SUCCESS
        }
        Err(e) => {
            print_error(output.format, output.quiet, &e.to_string());
            exit_codes::RUNTIME_ERROR
        }
    }
}
