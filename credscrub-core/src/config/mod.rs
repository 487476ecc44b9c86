use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::plaintext::DEFAULT_MIN_SECRET_LEN;
use crate::redact::REPLACE_STR;
use crate::secret::KnownSecret;
use crate::uri::is_valid_scheme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
    Auto,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RedactorConfig {
    /// Placeholder written in place of every secret.
    pub replacement: String,
    /// URI scheme allow-list; empty redacts every scheme.
    pub schemes: Vec<String>,
    /// Environment variables whose values are known secrets.
    pub known_secret_env: Vec<String>,
    pub min_known_secret_len: usize,
    /// Also redact the percent-encoded form of each known secret.
    pub percent_encoded: bool,
}

impl Default for RedactorConfig {
    fn default() -> Self {
        Self {
            replacement: REPLACE_STR.to_string(),
            schemes: Vec::new(),
            known_secret_env: Vec::new(),
            min_known_secret_len: DEFAULT_MIN_SECRET_LEN,
            percent_encoded: true,
        }
    }
}

impl RedactorConfig {
    pub fn parse(input: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        if input.trim().is_empty() {
            return Ok(Self::default());
        }
        match format {
            ConfigFormat::Json => Ok(serde_json::from_str(input)?),
            ConfigFormat::Yaml => Ok(serde_yaml::from_str(input)?),
            ConfigFormat::Auto => parse_auto(input),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !is_valid_replacement(&self.replacement) {
            return Err(ConfigError::InvalidReplacement(self.replacement.clone()));
        }
        if let Some(bad) = self.schemes.iter().find(|s| !is_valid_scheme(s)) {
            return Err(ConfigError::InvalidScheme(bad.clone()));
        }
        Ok(())
    }

    /// Values of the configured environment variables. Unset or empty
    /// variables are skipped.
    pub fn known_secrets_from_env(&self) -> Vec<KnownSecret> {
        self.known_secret_env
            .iter()
            .filter_map(|name| std::env::var(name).ok())
            .filter(|v| !v.is_empty())
            .map(KnownSecret::new)
            .collect()
    }
}

fn parse_auto(input: &str) -> Result<RedactorConfig, ConfigError> {
    // JSON always starts with `{` or `[` after trimming.
    let trimmed = input.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return match serde_json::from_str(input) {
            Ok(cfg) => Ok(cfg),
            Err(e) => serde_yaml::from_str(input).map_err(|_| ConfigError::Json(e)),
        };
    }
    match serde_yaml::from_str(input) {
        Ok(cfg) => Ok(cfg),
        Err(e) => serde_json::from_str(input).map_err(|_| ConfigError::Yaml(e)),
    }
}

// A token containing URI delimiters, quotes or whitespace would change how the
// redacted text is scanned the next time around.
fn is_valid_replacement(token: &str) -> bool {
    !token.is_empty()
        && !token.chars().any(|c| {
            c.is_whitespace() || matches!(c, '@' | ':' | '/' | '?' | '#' | '"' | '\'' | '<' | '>' | '`')
        })
}
