use std::collections::HashSet;

use crate::text::normalize;

/// Set of 3-character sequences for one document.
pub type TrigramSet = HashSet<String>;

/// Build the trigram set of `text` after normalization.
///
/// Windows are taken over chars, not bytes. Texts of one or two chars yield
/// a single-element set holding the whole text; empty text yields an empty set.
pub fn generate_trigrams(text: &str) -> TrigramSet {
    let chars: Vec<char> = normalize(text).chars().collect();
    if chars.len() < 3 {
        let mut set = TrigramSet::new();
        if !chars.is_empty() {
            set.insert(chars.iter().collect());
        }
        return set;
    }
    chars.windows(3).map(|w| w.iter().collect()).collect()
}

/// Jaccard similarity between two trigram sets, in [0.0, 1.0].
///
/// Two empty sets are identical (1.0); exactly one empty set scores 0.0.
pub fn trigram_similarity(a: &TrigramSet, b: &TrigramSet) -> f64 {
    if a.is_empty() && b.is_empty() {
        return 1.0;
    }
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let intersection = small.iter().filter(|t| large.contains(*t)).count();
    let union = a.len() + b.len() - intersection;

    intersection as f64 / union as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sliding_windows_over_normalized_text() {
        let t = generate_trigrams("ABCde");
        assert_eq!(t.len(), 3);
        assert!(t.contains("abc"));
        assert!(t.contains("bcd"));
        assert!(t.contains("cde"));
    }

    #[test]
    fn windows_are_char_based() {
        let t = generate_trigrams("東京都知事");
        assert!(t.contains("東京都"));
        assert!(t.contains("京都知"));
        assert!(t.contains("都知事"));
        assert_eq!(t.len(), 3);
    }

    #[test]
    fn short_text_is_single_element() {
        let t = generate_trigrams("Ab");
        assert_eq!(t.len(), 1);
        assert!(t.contains("ab"));
    }

    #[test]
    fn empty_text_is_empty_set() {
        assert!(generate_trigrams("").is_empty());
        assert!(generate_trigrams("   ").is_empty());
    }

    #[test]
    fn identical_sets_score_one() {
        let t = generate_trigrams("kaca pecah");
        assert_eq!(trigram_similarity(&t, &t), 1.0);
    }

    #[test]
    fn empty_edge_cases() {
        let empty = TrigramSet::new();
        let some = generate_trigrams("kaca");
        assert_eq!(trigram_similarity(&empty, &empty), 1.0);
        assert_eq!(trigram_similarity(&empty, &some), 0.0);
        assert_eq!(trigram_similarity(&some, &empty), 0.0);
    }

    #[test]
    fn partial_overlap_is_jaccard() {
        // "abcd" -> {abc, bcd}; "bcde" -> {bcd, cde}; 1 shared of 3.
        let a = generate_trigrams("abcd");
        let b = generate_trigrams("bcde");
        assert!((trigram_similarity(&a, &b) - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn disjoint_sets_score_zero() {
        let a = generate_trigrams("aaaa");
        let b = generate_trigrams("zzzz");
        assert_eq!(trigram_similarity(&a, &b), 0.0);
    }
}
