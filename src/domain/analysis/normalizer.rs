//! Text normalization and tokenization for free-text answers.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Canonicalizes text for keyword matching.
///
/// Decomposes to NFD, drops combining marks, lowercases, and folds the few
/// stroked letters that have no decomposition (`ł`, `đ`, `ø`). Total: empty
/// input gives an empty string.
pub fn normalize(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .map(fold_stroked)
        .collect()
}

/// Splits normalized text into letter-only tokens.
///
/// Any run of non-letter characters is a separator; empty tokens are dropped.
pub fn tokenize(normalized: &str) -> impl Iterator<Item = &str> {
    normalized
        .split(|c: char| !c.is_alphabetic())
        .filter(|token| !token.is_empty())
}

fn fold_stroked(c: char) -> char {
    match c {
        'ł' => 'l',
        'đ' => 'd',
        'ø' => 'o',
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_polish_diacritics() {
        assert_eq!(normalize("Żółć gęślą jaźń"), "zolc gesla jazn");
    }

    #[test]
    fn normalize_folds_stroked_l() {
        assert_eq!(normalize("SŁUCHAĆ"), "sluchac");
        assert_eq!(normalize("słuchać"), "sluchac");
    }

    #[test]
    fn normalize_handles_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = normalize("Nie lubię obrazów!");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn tokenize_splits_on_non_letters() {
        let tokens: Vec<&str> = tokenize("lubie   mapy,2 wykresy...i-audio").collect();
        assert_eq!(tokens, vec!["lubie", "mapy", "wykresy", "i", "audio"]);
    }

    #[test]
    fn tokenize_drops_empty_tokens() {
        assert_eq!(tokenize("  ,,, 123 ").count(), 0);
        assert_eq!(tokenize("").count(), 0);
    }
}
