//! Secret-reference discovery in the ambient environment.

use std::collections::HashMap;

/// Split a `KEY=VALUE` environment entry on its first `=` only, so values may
/// themselves contain `=`. Entries without a separator are rejected.
pub(crate) fn split_entry(entry: &str) -> Option<(&str, &str)> {
    entry.split_once('=')
}

/// Return the entries of `environ` whose key ends with `suffix`, keyed by the
/// full (unstripped) variable name.
///
/// Pure and deterministic: empty input or no match yields an empty map.
/// Malformed entries lacking `=` are skipped.
#[must_use]
pub fn scan_with_suffix(environ: &[String], suffix: &str) -> HashMap<String, String> {
    let mut result = HashMap::new();

    for entry in environ {
        let Some((key, value)) = split_entry(entry) else {
            continue;
        };
        if key.ends_with(suffix) {
            result.insert(key.to_string(), value.to_string());
        }
    }

    result
}

/// Derive the injected variable name from a reference key by removing the
/// suffix marker.
#[must_use]
pub fn strip_suffix_key<'a>(key: &'a str, suffix: &str) -> &'a str {
    key.strip_suffix(suffix).unwrap_or(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ssmrun_core::constants::SSM_PARAMETER_SUFFIX;

    fn environ(entries: &[&str]) -> Vec<String> {
        entries.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn finds_only_suffixed_keys() {
        let env = environ(&[
            "FOO_SSM_PARAMETER_NAME=paramA",
            "BAZ=qux",
            "BAR_SSM_PARAMETER_NAME=paramB",
        ]);
        let found = scan_with_suffix(&env, SSM_PARAMETER_SUFFIX);
        assert_eq!(found.len(), 2);
        assert_eq!(found["FOO_SSM_PARAMETER_NAME"], "paramA");
        assert_eq!(found["BAR_SSM_PARAMETER_NAME"], "paramB");
    }

    #[test]
    fn empty_and_no_match_yield_empty() {
        assert!(scan_with_suffix(&[], SSM_PARAMETER_SUFFIX).is_empty());

        let env = environ(&["PATH=/usr/bin", "HOME=/root"]);
        assert!(scan_with_suffix(&env, SSM_PARAMETER_SUFFIX).is_empty());
    }

    #[test]
    fn splits_on_first_equals_only() {
        let env = environ(&["DB_SSM_PARAMETER_NAME=/app/db?opt=1"]);
        let found = scan_with_suffix(&env, SSM_PARAMETER_SUFFIX);
        assert_eq!(found["DB_SSM_PARAMETER_NAME"], "/app/db?opt=1");
    }

    #[test]
    fn skips_entries_without_separator() {
        let env = environ(&["NOT_AN_ENTRY_SSM_PARAMETER_NAME", "A_SSM_PARAMETER_NAME=p"]);
        let found = scan_with_suffix(&env, SSM_PARAMETER_SUFFIX);
        assert_eq!(found.len(), 1);
        assert_eq!(found["A_SSM_PARAMETER_NAME"], "p");
    }

    #[test]
    fn scanning_is_idempotent() {
        let env = environ(&["FOO_SSM_PARAMETER_NAME=paramA", "BAZ=qux"]);
        let first = scan_with_suffix(&env, SSM_PARAMETER_SUFFIX);
        let second = scan_with_suffix(&env, SSM_PARAMETER_SUFFIX);
        assert_eq!(first, second);
    }

    #[test]
    fn derives_key_by_stripping_suffix() {
        assert_eq!(
            strip_suffix_key("FOO_SSM_PARAMETER_NAME", SSM_PARAMETER_SUFFIX),
            "FOO"
        );
        assert_eq!(strip_suffix_key("FOO", SSM_PARAMETER_SUFFIX), "FOO");
    }
}
