//! Locale-aware text ordering.
//!
//! Titles are Portuguese. Plain byte order puts "Órfã" after "Zebra" and
//! "bacia" after "Vaso", which reads as broken to anyone browsing. Titles are
//! compared on a folded form first (decomposed, combining marks dropped,
//! lowercased) and only then on the original text, so the order is total and
//! repeatable.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, accent-free form of `s` used as the primary sort key.
pub fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Sort key: folded text first, original text to break ties.
pub fn collation_key(s: &str) -> (String, String) {
    (fold(s), s.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_strips_accents_and_case() {
        assert_eq!(fold("Órfã"), "orfa");
        assert_eq!(fold("Cerâmica"), "ceramica");
        assert_eq!(fold("AÇÃO"), "acao");
    }

    #[test]
    fn test_collation_order() {
        let mut titles = vec!["Zebra", "Órfã", "bacia", "Vaso", "ábaco"];
        titles.sort_by_cached_key(|t| collation_key(t));
        assert_eq!(titles, vec!["ábaco", "bacia", "Órfã", "Vaso", "Zebra"]);
    }

    #[test]
    fn test_empty_sorts_first() {
        assert!(collation_key("") < collation_key("a"));
    }
}
