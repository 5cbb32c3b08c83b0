//! Token normalization for postcodes and delivery method names.
//!
//! Postcode tokens are lowercase ASCII alphanumerics only. A destination
//! postcode collapses to one token, so `"9013"`, `" 9013 "` and `"90-13"`
//! compare equal. A configured entry is split at separators first, so
//! `"SW1A 1AA"` configures `sw1a` and `1aa`, never `sw1a1aa`. Method tokens
//! are trimmed and lowercased but keep inner spaces and punctuation
//! (`"rural courier"`).

use std::collections::BTreeSet;
use std::sync::LazyLock;

use regex::Regex;

/// Sorted, deduplicated set of normalized tokens.
pub type TokenSet = BTreeSet<String>;

static SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("valid separator pattern"));

/// Normalize one postcode: lowercase, then drop everything but `[a-z0-9]`.
pub fn normalize_postcode(raw: &str) -> String {
    raw.to_lowercase()
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect()
}

/// Expand configured postcode entries into a token set.
///
/// A single entry may hold several postcodes separated by any run of
/// non-alphanumeric characters (`"9013. 9012"` yields `9013` and `9012`).
pub fn normalize_postcodes<S: AsRef<str>>(entries: &[S]) -> TokenSet {
    entries
        .iter()
        .flat_map(|entry| {
            let lowered = entry.as_ref().to_lowercase();
            SEPARATOR_RE
                .split(&lowered)
                .map(normalize_postcode)
                .filter(|token| !token.is_empty())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Normalize one method name: trim and lowercase.
pub fn normalize_method(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Normalize configured method names; blank entries are dropped.
pub fn normalize_methods<S: AsRef<str>>(entries: &[S]) -> TokenSet {
    entries
        .iter()
        .map(|entry| normalize_method(entry.as_ref()))
        .filter(|token| !token.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(items: &[&str]) -> TokenSet {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn clean_postcode_is_unchanged() {
        assert_eq!(normalize_postcode("9013"), "9013");
        assert_eq!(normalize_postcode(&normalize_postcode("9013")), "9013");
    }

    #[test]
    fn postcode_formatting_is_ignored() {
        assert_eq!(normalize_postcode(" SW1A-1AA "), "sw1a1aa");
        assert_eq!(normalize_postcode("90.210"), "90210");
        assert_eq!(normalize_postcode(""), "");
    }

    #[test]
    fn concatenated_entry_expands_to_each_postcode() {
        assert_eq!(normalize_postcodes(&["9013. 9012"]), tokens(&["9013", "9012"]));
    }

    #[test]
    fn mixed_separators_expand_and_union() {
        let entries = ["9010,9020\n9030", "9040 - 9050", "9010"];
        assert_eq!(
            normalize_postcodes(&entries),
            tokens(&["9010", "9020", "9030", "9040", "9050"])
        );
    }

    #[test]
    fn configured_entry_with_inner_space_splits_into_tokens() {
        assert_eq!(normalize_postcodes(&["SW1A 1AA"]), tokens(&["1aa", "sw1a"]));
        assert!(!normalize_postcodes(&["SW1A 1AA"]).contains(&normalize_postcode("sw1a-1aa")));
    }

    #[test]
    fn separator_only_entries_produce_nothing() {
        assert!(normalize_postcodes(&[" ,. -", ""]).is_empty());
    }

    #[test]
    fn non_ascii_characters_act_as_separators() {
        assert_eq!(normalize_postcodes(&["9013\u{2013}9012"]), tokens(&["9013", "9012"]));
    }

    #[test]
    fn methods_keep_inner_spaces() {
        assert_eq!(
            normalize_methods(&["  Rural Courier ", "rural-courier", "RURAL COURIER"]),
            tokens(&["rural courier", "rural-courier"])
        );
    }

    #[test]
    fn blank_methods_are_dropped() {
        assert!(normalize_methods(&["   ", ""]).is_empty());
    }
}
