//! Slug derivation for campaign URLs.
//!
//! Slugs are lower-cased, hyphen-separated runs of ASCII letters and digits.
//! Text is transliterated to ASCII first, so accented letters survive.

use deunicode::deunicode;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::SLUG_SEPARATOR;

static APOSTROPHE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"['’]").expect("valid apostrophe regex"));
static NON_SLUG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid slug separator regex"));

/// Turn free text into a URL-safe slug.
///
/// `&` and `@` read as words, apostrophes are dropped so contractions stay one
/// word, and every other run of non-alphanumeric characters becomes a single
/// separator.
pub fn slugify(text: &str) -> String {
    let lowered = deunicode(text)
        .to_lowercase()
        .replace('&', " and ")
        .replace('@', " at ");
    let joined = APOSTROPHE_RE.replace_all(&lowered, "");
    let slug = NON_SLUG_RE.replace_all(&joined, SLUG_SEPARATOR.to_string().as_str());
    slug.trim_matches(SLUG_SEPARATOR).to_string()
}

/// Slug for a campaign: the name suffixed with the owner's id.
pub fn campaign_slug(name: &str, owner_id: i64) -> String {
    let slug = slugify(&format!("{} {}", name, owner_id));
    debug_assert!(is_valid_slug(&slug), "malformed campaign slug {slug:?}");
    slug
}

fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with(SLUG_SEPARATOR)
        && !value.ends_with(SLUG_SEPARATOR)
        && !value.contains("--")
        && value
            .chars()
            .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == SLUG_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_slug_appends_owner() {
        assert_eq!(campaign_slug("Help My Cat", 7), "help-my-cat-7");
        assert_eq!(campaign_slug("Help My Cat", 7), slugify("Help My Cat 7"));
    }

    #[test]
    fn test_slug_is_deterministic() {
        assert_eq!(campaign_slug("Solar Roof!", 12), campaign_slug("Solar Roof!", 12));
    }

    #[test]
    fn test_punctuation_and_whitespace_collapse() {
        assert_eq!(slugify("  Hello,   World!!  "), "hello-world");
        assert_eq!(slugify("a_b.c/d"), "a-b-c-d");
    }

    #[test]
    fn test_symbols_and_apostrophes() {
        assert_eq!(slugify("Tom & Jerry's Fund"), "tom-and-jerrys-fund");
        assert_eq!(slugify("Meet @ Noon"), "meet-at-noon");
    }

    #[test]
    fn test_non_ascii_is_transliterated() {
        assert_eq!(slugify("Café Über 9"), "cafe-uber-9");
        assert_eq!(slugify("Straße’s Fund"), "strasses-fund");
        assert!(is_valid_slug(&slugify("北京 Relief")));
    }

    #[test]
    fn test_accents_do_not_collide_with_truncated_names() {
        assert_eq!(campaign_slug("Café", 7), "cafe-7");
        assert_ne!(campaign_slug("Café", 7), campaign_slug("Caf", 7));
    }

    #[test]
    fn test_is_valid_slug() {
        assert!(is_valid_slug("help-my-cat-7"));
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("Upper"));
    }
}
