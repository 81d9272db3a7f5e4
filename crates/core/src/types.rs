//! Secret-handling types.
//!
//! Resolved plaintext lives only for the duration of one invocation: values are
//! zeroized on drop and their `Debug` output is redacted.

use std::collections::HashMap;
use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

/// Secret plaintext that zeroizes on drop and never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct SecretString(String);

impl SecretString {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for SecretString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(<redacted>)")
    }
}

/// Mapping from derived environment variable name to resolved secret value.
///
/// Built incrementally as references are resolved and handed to the launcher
/// once; dropping it zeroizes every value.
#[derive(Debug, Default)]
pub struct ResolvedSecrets(HashMap<String, SecretString>);

impl ResolvedSecrets {
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Insert a resolved secret under its derived key, returning the previous
    /// value if the key was already present.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<SecretString>,
    ) -> Option<SecretString> {
        self.0.insert(key.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(SecretString::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over (derived key, plaintext) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_is_redacted() {
        let secret = SecretString::new("hunter2");
        let rendered = format!("{secret:?}");
        assert!(!rendered.contains("hunter2"));

        let mut secrets = ResolvedSecrets::new();
        secrets.insert("TOKEN", SecretString::new("hunter2"));
        let rendered = format!("{secrets:?}");
        assert!(rendered.contains("TOKEN"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn insert_and_get_by_derived_key() {
        let mut secrets = ResolvedSecrets::new();
        assert!(secrets.is_empty());

        secrets.insert("FOO", SecretString::new("bar"));
        assert_eq!(secrets.get("FOO"), Some("bar"));
        assert_eq!(secrets.get("MISSING"), None);
        assert_eq!(secrets.len(), 1);
    }

    #[test]
    fn reinsert_replaces_previous_value() {
        let mut secrets = ResolvedSecrets::new();
        secrets.insert("FOO", SecretString::new("old"));
        let previous = secrets.insert("FOO", SecretString::new("new"));
        assert_eq!(previous, Some(SecretString::new("old")));
        assert_eq!(secrets.get("FOO"), Some("new"));
    }
}
