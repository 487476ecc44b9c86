use std::ops::Range;

use crate::config::RedactorConfig;
use crate::error::ConfigError;
use crate::plaintext::SecretSet;
use crate::redact::{LineIndex, Redaction, UriCleaner};
use crate::secret::KnownSecret;

/// URI credentials first, then known secrets, in one call.
#[derive(Debug)]
pub struct Redactor {
    uris: UriCleaner,
    known: SecretSet,
}

impl Default for Redactor {
    fn default() -> Self {
        Self {
            uris: UriCleaner::new(),
            known: SecretSet::new(),
        }
    }
}

impl Redactor {
    /// Builds a redactor from a validated config. Known secrets are read from
    /// the environment variables the config names.
    pub fn from_config(config: &RedactorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut known = SecretSet::new()
            .with_replacement(config.replacement.clone())
            .with_min_len(config.min_known_secret_len)
            .with_percent_encoded(config.percent_encoded);
        known.extend(config.known_secrets_from_env());
        Ok(Self {
            uris: UriCleaner::with_replacement(config.replacement.clone())
                .with_schemes(&config.schemes),
            known,
        })
    }

    /// Adds caller-supplied secrets; returns how many were accepted.
    pub fn add_known_secrets<I, S>(&mut self, secrets: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<KnownSecret>,
    {
        self.known.extend(secrets)
    }

    pub fn known_secret_count(&self) -> usize {
        self.known.len()
    }

    pub fn clean(&self, cleartext: &str) -> String {
        self.redact(cleartext).text
    }

    pub fn redact(&self, cleartext: &str) -> Redaction {
        let (first, replaced) = self.uris.redact_spans(cleartext);
        if self.known.is_empty() {
            return first;
        }
        // The known-secret pass never cuts into a token, so every offset it
        // reports maps back onto the input.
        let second = self.known.redact(&first.text);
        let lines = LineIndex::new(cleartext);
        let token_len = self.uris.replacement().len();
        let mut findings = first.findings;
        findings.extend(second.findings.into_iter().map(|mut f| {
            f.offset = input_offset(&replaced, token_len, f.offset);
            f.line = lines.line_of(f.offset);
            f
        }));
        findings.sort_by_key(|f| (f.line, f.offset));
        Redaction {
            text: second.text,
            findings,
        }
    }
}

/// Maps an offset in the URI pass output back to its input. `replaced` holds
/// the input spans that pass swapped for a `token_len`-byte token, in order.
fn input_offset(replaced: &[Range<usize>], token_len: usize, offset: usize) -> usize {
    let (mut consumed, mut emitted) = (0, 0);
    for span in replaced {
        let out_start = span.start - consumed + emitted;
        if offset < out_start {
            break;
        }
        if offset < out_start + token_len {
            return span.start;
        }
        consumed += span.len();
        emitted += token_len;
    }
    offset + consumed - emitted
}
