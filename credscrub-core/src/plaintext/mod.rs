//! Redaction of secrets the caller already knows.

use std::ops::Range;

use crate::redact::{fingerprint, Finding, FindingKind, LineIndex, Redaction, REPLACE_STR};
use crate::secret::KnownSecret;

pub const DEFAULT_MIN_SECRET_LEN: usize = 4;

/// Scrubs a single known secret out of a text verbatim.
pub struct PlainTextCleaner;

impl PlainTextCleaner {
    pub const REPLACE_STR: &'static str = REPLACE_STR;

    pub fn remove_sensitive(cleartext: &str, sensitive: &str) -> String {
        if sensitive.is_empty() {
            return cleartext.to_string();
        }
        cleartext.replace(sensitive, REPLACE_STR)
    }
}

struct Entry {
    secret: KnownSecret,
    /// Percent-encoded form, when it differs from the raw secret.
    encoded: Option<KnownSecret>,
}

/// A set of known secrets redacted in one left-to-right pass. At any position
/// the longest matching secret wins.
pub struct SecretSet {
    entries: Vec<Entry>,
    replacement: String,
    min_len: usize,
    percent_encoded: bool,
}

impl Default for SecretSet {
    fn default() -> Self {
        Self::new()
    }
}

impl SecretSet {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            replacement: REPLACE_STR.to_string(),
            min_len: DEFAULT_MIN_SECRET_LEN,
            percent_encoded: true,
        }
    }

    pub fn with_replacement(mut self, replacement: impl Into<String>) -> Self {
        self.replacement = replacement.into();
        self
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub fn with_percent_encoded(mut self, enabled: bool) -> Self {
        self.percent_encoded = enabled;
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds a secret. Returns `false` when the secret is shorter than the
    /// minimum length, already present, or a substring of the replacement
    /// token (which would make redaction non-idempotent).
    pub fn insert(&mut self, secret: impl Into<KnownSecret>) -> bool {
        let secret = secret.into();
        let raw = secret.expose();
        if raw.chars().count() < self.min_len.max(1) || self.replacement.contains(raw) {
            return false;
        }
        if self.entries.iter().any(|e| e.secret == secret) {
            return false;
        }

        let mut encoded = None;
        if self.percent_encoded {
            let enc = urlencoding::encode(raw);
            if enc != raw && !self.replacement.contains(&*enc) {
                encoded = Some(KnownSecret::new(enc.into_owned()));
            }
        }
        self.entries.push(Entry { secret, encoded });
        true
    }

    pub fn extend<I, S>(&mut self, secrets: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<KnownSecret>,
    {
        secrets
            .into_iter()
            .fold(0, |n, s| n + usize::from(self.insert(s)))
    }

    pub fn clean(&self, cleartext: &str) -> String {
        self.redact(cleartext).text
    }

    pub fn redact(&self, cleartext: &str) -> Redaction {
        if self.entries.is_empty() {
            return Redaction::unchanged(cleartext);
        }

        // (pattern, secret it stands for), longest pattern first.
        let mut patterns: Vec<(&str, &KnownSecret)> = self
            .entries
            .iter()
            .flat_map(|e| {
                std::iter::once((e.secret.expose(), &e.secret))
                    .chain(e.encoded.iter().map(move |enc| (enc.expose(), &e.secret)))
            })
            .collect();
        patterns.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        // Tokens already in the text are opaque: a match may swallow one whole
        // but never start or end inside one.
        let tokens: Vec<Range<usize>> = if self.replacement.is_empty() {
            Vec::new()
        } else {
            cleartext
                .match_indices(self.replacement.as_str())
                .map(|(at, t)| at..at + t.len())
                .collect()
        };

        let bytes = cleartext.as_bytes();
        let lines = LineIndex::new(cleartext);
        let mut out = String::with_capacity(cleartext.len());
        let mut findings = Vec::new();
        let mut cursor = 0;
        let mut i = 0;

        while i < bytes.len() {
            // A pattern is valid UTF-8, so a match can only begin on a char boundary.
            match patterns.iter().find(|(p, _)| {
                bytes[i..].starts_with(p.as_bytes()) && !cuts_token(&tokens, i..i + p.len())
            }) {
                Some((pattern, secret)) => {
                    out.push_str(&cleartext[cursor..i]);
                    out.push_str(&self.replacement);
                    findings.push(Finding {
                        kind: FindingKind::KnownSecret,
                        line: lines.line_of(i),
                        offset: i,
                        scheme: None,
                        host: None,
                        fingerprint: fingerprint(secret.expose().as_bytes()),
                    });
                    i += pattern.len();
                    cursor = i;
                }
                None => i += 1,
            }
        }
        out.push_str(&cleartext[cursor..]);

        Redaction {
            text: out,
            findings,
        }
    }
}

fn cuts_token(tokens: &[Range<usize>], span: Range<usize>) -> bool {
    let first = tokens.partition_point(|t| t.end <= span.start);
    tokens[first..]
        .iter()
        .take_while(|t| t.start < span.end)
        .any(|t| t.start < span.start || t.end > span.end)
}

impl std::fmt::Debug for SecretSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSet")
            .field("secrets", &self.entries.len())
            .field("replacement", &self.replacement)
            .field("min_len", &self.min_len)
            .field("percent_encoded", &self.percent_encoded)
            .finish()
    }
}
