use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use super::UriMatch;

// Scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ending right before `://`. No
// leading anchor, so a URI glued to preceding text (`失敗https://`, `url_https://`) still
// matches. The authority stops at the first path/query/fragment delimiter, whitespace or quote.
static URI_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r##"([A-Za-z][A-Za-z0-9+.\-]*)://([^\s/?#"'<>`]*)"##).expect("valid regex")
});

const MAX_SCHEME_LEN: usize = 20;

/// Every URI reference in `text`, in order of appearance. Never fails; text
/// with no `scheme://` yields an empty vector.
pub fn scan_uris(text: &str) -> Vec<UriMatch> {
    URI_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let scheme = trim_scheme(text, caps.get(1)?.range());
            let authority = caps.get(2)?.range();
            Some(split_authority(text, scheme, authority))
        })
        .collect()
}

/// Over-long runs keep their last 20 chars, starting at the first letter
/// among them when there is one.
fn trim_scheme(text: &str, scheme: Range<usize>) -> Range<usize> {
    if scheme.len() <= MAX_SCHEME_LEN {
        return scheme;
    }
    let tail = scheme.end - MAX_SCHEME_LEN;
    let start = text[tail..scheme.end]
        .find(|c: char| c.is_ascii_alphabetic())
        .map_or(tail, |i| tail + i);
    start..scheme.end
}

fn split_authority(text: &str, scheme: Range<usize>, authority: Range<usize>) -> UriMatch {
    let base = authority.start;
    let raw = &text[authority.clone()];

    // The last `@` wins: passwords may contain `@`, hosts may not.
    if let Some(at) = raw.rfind('@') {
        let (username, password) = match raw[..at].find(':') {
            Some(colon) => (base..base + colon, Some(base + colon + 1..base + at)),
            None => (base..base + at, None),
        };
        return UriMatch {
            scheme,
            host: base + at + 1..authority.end,
            authority,
            username: Some(username),
            password,
        };
    }

    // No `@`: an SCM tool may already have dropped the host, leaving `user:password`.
    if !raw.starts_with('[') {
        if let Some((user, pass)) = raw.split_once(':') {
            if !pass.is_empty() && !pass.bytes().all(|b| b.is_ascii_digit()) {
                let colon = base + user.len();
                return UriMatch {
                    scheme,
                    host: authority.end..authority.end,
                    authority,
                    username: Some(base..colon),
                    password: Some(colon + 1..base + raw.len()),
                };
            }
        }
    }

    UriMatch {
        scheme,
        host: authority.clone(),
        authority,
        username: None,
        password: None,
    }
}

pub fn is_valid_scheme(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.')
}
