//! Pure text transforms used to shape form input on the client
//!
//! All functions here are total: any `&str` (including empty) yields a value,
//! nothing panics and nothing allocates more than the output.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Scheme prepended by [`ensure_url_scheme`] when the user typed a bare host
pub const DEFAULT_URL_SCHEME: &str = "https://";

/// Build a URL-safe slug from free text.
///
/// Accented letters are decomposed and their combining marks dropped, the
/// result is lower-cased, and every run of characters outside `[a-z0-9]`
/// collapses into a single `-`. Leading and trailing separators never appear.
///
/// ```
/// use contracts::shared::shaping::slugify;
///
/// assert_eq!(slugify("Café Déco"), "cafe-deco");
/// assert_eq!(slugify("  Hello---World!! "), "hello-world");
/// ```
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_separator = false;

    let chars = input
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        // to_lowercase may itself emit combining marks ('İ' -> "i\u{307}")
        .filter(|c| !is_combining_mark(*c));

    for ch in chars {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Upper-case a short code (ISO currency or country code), dropping whitespace
pub fn uppercase_code(input: &str) -> String {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Prefix a bare host or path with `https://`.
///
/// Empty input stays empty so optional URL fields are not filled in by accident.
/// Values that already carry a scheme are only trimmed.
pub fn ensure_url_scheme(input: &str) -> String {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.contains("://") {
        return trimmed.to_string();
    }
    if let Some(rest) = trimmed.strip_prefix("//") {
        return format!("{}{}", DEFAULT_URL_SCHEME, rest);
    }
    format!("{}{}", DEFAULT_URL_SCHEME, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLES: &[&str] = &[
        "",
        " ",
        "---",
        "Café Déco",
        "  Hello---World!! ",
        "Ünïcödé Çategory",
        "İstanbul Şube",
        "Graphics Cards & Accessories",
        "Процессоры Intel",
        "1080p / 4K Monitors",
        "-leading and trailing-",
        "ALL CAPS",
        "tab\tseparated\nlines",
        "emoji 🚀 rocket",
        "ß and æ",
        "a",
        "already-a-slug",
        "x--y__z",
    ];

    #[test]
    fn test_slugify_strips_diacritics() {
        assert_eq!(slugify("Café Déco"), "cafe-deco");
        assert_eq!(slugify("Ünïcödé Çategory"), "unicode-category");
        assert_eq!(slugify("İstanbul Şube"), "istanbul-sube");
    }

    #[test]
    fn test_slugify_collapses_separators() {
        assert_eq!(slugify("  Hello---World!! "), "hello-world");
        assert_eq!(slugify("Graphics Cards & Accessories"), "graphics-cards-accessories");
        assert_eq!(slugify("x--y__z"), "x-y-z");
        assert_eq!(slugify("-leading and trailing-"), "leading-and-trailing");
        assert_eq!(slugify("tab\tseparated\nlines"), "tab-separated-lines");
    }

    #[test]
    fn test_slugify_degrades_to_empty() {
        assert_eq!(slugify(""), "");
        assert_eq!(slugify("   "), "");
        assert_eq!(slugify("---"), "");
        assert_eq!(slugify("Процессоры"), "");
        assert_eq!(slugify("Процессоры Intel"), "intel");
        assert_eq!(slugify("emoji 🚀 rocket"), "emoji-rocket");
    }

    #[test]
    fn test_slugify_is_idempotent() {
        for sample in SAMPLES {
            let once = slugify(sample);
            assert_eq!(slugify(&once), once, "input: {:?}", sample);
        }
    }

    #[test]
    fn test_slugify_is_deterministic() {
        for sample in SAMPLES {
            assert_eq!(slugify(sample), slugify(sample));
        }
    }

    #[test]
    fn test_slugify_output_alphabet() {
        for sample in SAMPLES {
            let slug = slugify(sample);
            assert!(slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            assert!(!slug.starts_with('-') && !slug.ends_with('-'));
            assert!(!slug.contains("--"));
        }
    }

    #[test]
    fn test_uppercase_code() {
        assert_eq!(uppercase_code("usd"), "USD");
        assert_eq!(uppercase_code(" e ur "), "EUR");
        assert_eq!(uppercase_code(""), "");
    }

    #[test]
    fn test_ensure_url_scheme() {
        assert_eq!(ensure_url_scheme("example.com"), "https://example.com");
        assert_eq!(ensure_url_scheme("  example.com/download "), "https://example.com/download");
        assert_eq!(ensure_url_scheme("http://example.com"), "http://example.com");
        assert_eq!(ensure_url_scheme("//cdn.example.com"), "https://cdn.example.com");
        assert_eq!(ensure_url_scheme(""), "");
        assert_eq!(ensure_url_scheme("   "), "");
    }
}
