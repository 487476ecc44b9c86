use std::sync::Arc;

use zeroize::Zeroizing;

/// A secret supplied by the caller. Not `Debug`/`Display` printable and
/// zeroized on drop.
#[derive(Clone)]
pub struct KnownSecret(Arc<Zeroizing<String>>);

impl KnownSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        Self(Arc::new(Zeroizing::new(secret.into())))
    }

    pub fn expose(&self) -> &str {
        self.0.as_str()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for KnownSecret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for KnownSecret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl PartialEq for KnownSecret {
    fn eq(&self, other: &Self) -> bool {
        self.expose() == other.expose()
    }
}

impl Eq for KnownSecret {}

impl std::fmt::Debug for KnownSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("KnownSecret(<redacted>)")
    }
}
