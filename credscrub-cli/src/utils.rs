use std::io::Read;
use std::path::{Path, PathBuf};

use credscrub_core::{ConfigFormat, CredscrubError, KnownSecret, Redactor, RedactorConfig};
use zeroize::Zeroizing;

use crate::RedactorArgs;

pub const CONFIG_ENV: &str = "CREDSCRUB_CONFIG";
pub const STDIN_LABEL: &str = "<stdin>";

/// Config file (flag, then env), with command-line flags layered on top.
pub fn load_config(args: &RedactorArgs) -> Result<RedactorConfig, CredscrubError> {
    let path = args
        .config
        .clone()
        .or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));

    let mut config = match path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .map_err(|e| CredscrubError::io(path.display().to_string(), e))?;
            RedactorConfig::parse(&content, ConfigFormat::Auto)?
        }
        None => RedactorConfig::default(),
    };

    if let Some(replacement) = &args.replacement {
        config.replacement = replacement.clone();
    }
    config.known_secret_env.extend(args.secret_env.iter().cloned());
    config.schemes.extend(args.schemes.iter().cloned());
    config.validate()?;
    Ok(config)
}

pub fn build_redactor(args: &RedactorArgs) -> Result<Redactor, CredscrubError> {
    redactor_from_config(&load_config(args)?, args)
}

/// Builds the redactor from an already loaded config, adding the secrets file.
pub fn redactor_from_config(
    config: &RedactorConfig,
    args: &RedactorArgs,
) -> Result<Redactor, CredscrubError> {
    let mut redactor = Redactor::from_config(config)?;
    if let Some(path) = &args.secrets_file {
        let content = Zeroizing::new(
            std::fs::read_to_string(path)
                .map_err(|e| CredscrubError::io(path.display().to_string(), e))?,
        );
        redactor.add_known_secrets(parse_secrets_file(&content));
    }
    Ok(redactor)
}

/// One secret per line; blank lines and `#` comments are skipped. Only line
/// endings are trimmed since surrounding spaces may be part of a secret.
fn parse_secrets_file(content: &str) -> Vec<KnownSecret> {
    content
        .lines()
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty() && !l.starts_with('#'))
        .map(KnownSecret::from)
        .collect()
}

pub struct Input {
    pub label: String,
    pub path: Option<PathBuf>,
    pub text: String,
}

/// Reads every path, or stdin when there are none.
pub fn read_inputs(paths: &[PathBuf]) -> Result<Vec<Input>, CredscrubError> {
    if paths.is_empty() {
        let mut bytes = Vec::new();
        std::io::stdin()
            .read_to_end(&mut bytes)
            .map_err(|e| CredscrubError::io(STDIN_LABEL, e))?;
        return Ok(vec![Input {
            label: STDIN_LABEL.to_string(),
            path: None,
            text: decode(bytes),
        }]);
    }
    paths.iter().map(|p| read_file(p)).collect()
}

fn read_file(path: &Path) -> Result<Input, CredscrubError> {
    let label = path.display().to_string();
    let bytes = std::fs::read(path).map_err(|e| CredscrubError::io(label.clone(), e))?;
    Ok(Input {
        label,
        path: Some(path.to_path_buf()),
        text: decode(bytes),
    })
}

/// Logs are not always UTF-8. Invalid sequences become U+FFFD so the rest of
/// the input is still redacted.
fn decode(bytes: Vec<u8>) -> String {
    String::from_utf8(bytes)
        .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_file_skips_comments_and_blanks() {
        let got = parse_secrets_file("# deploy keys\nhunter22\n\n  \r\n tok en \r\n");
        let got: Vec<&str> = got.iter().map(|s| s.expose()).collect();
        assert_eq!(got, vec!["hunter22", " tok en "]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_rejected() {
        assert_eq!(decode(b"ok https://u:p@h".to_vec()), "ok https://u:p@h");
        assert_eq!(decode(b"\xff\xfe https://u:p@h".to_vec()), "\u{fffd}\u{fffd} https://u:p@h");
    }
}
