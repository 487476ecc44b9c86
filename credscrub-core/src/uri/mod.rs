//! Discovery of credential-bearing URI references in free-form text.

mod scan;

use std::ops::Range;

pub use scan::{is_valid_scheme, scan_uris};

/// One `scheme://authority` occurrence. All ranges are byte offsets into the
/// scanned text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UriMatch {
    pub scheme: Range<usize>,
    /// Everything after `://` up to the first path, query, fragment,
    /// whitespace or quote character.
    pub authority: Range<usize>,
    /// `None` when the authority carries no userinfo. May be empty.
    pub username: Option<Range<usize>>,
    /// `None` when the userinfo has no `:`. May be empty.
    pub password: Option<Range<usize>>,
    pub host: Range<usize>,
}

impl UriMatch {
    pub fn scheme_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.scheme.clone()]
    }

    pub fn host_str<'a>(&self, text: &'a str) -> &'a str {
        &text[self.host.clone()]
    }

    pub fn has_credentials(&self) -> bool {
        self.secret_count() > 0
    }

    /// Number of present, non-empty secret fields.
    pub fn secret_count(&self) -> usize {
        self.secret_spans().count()
    }

    /// Non-empty username/password spans in text order, tagged with whether
    /// the span is the password.
    pub fn secret_spans(&self) -> impl Iterator<Item = (Range<usize>, bool)> + '_ {
        self.username
            .iter()
            .map(|r| (r.clone(), false))
            .chain(self.password.iter().map(|r| (r.clone(), true)))
            .filter(|(r, _)| !r.is_empty())
    }
}
