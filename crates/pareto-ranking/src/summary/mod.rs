//! Cluster summaries: key phrase, dominant category, sample ids.

pub mod importance;

use std::collections::{HashMap, HashSet};

use crate::text::{extract_keywords, normalize};

pub use importance::{cluster_importance, domain_weight};

/// Short phrase describing a cluster.
///
/// Each keyword is counted once per member text, scored as
/// `member_count × importance`, and the top `max_words` are joined with
/// spaces. Ties keep first-seen order. When no member yields a keyword, the
/// first tokens of the first non-empty text are used instead.
pub fn cluster_key_phrase(texts: &[&str], max_words: usize) -> String {
    let texts: Vec<&str> = texts.iter().copied().filter(|t| !t.trim().is_empty()).collect();
    let Some(first) = texts.first() else {
        return String::new();
    };

    let mut order: Vec<String> = Vec::new();
    let mut doc_freq: HashMap<String, usize> = HashMap::new();
    for text in &texts {
        let mut seen = HashSet::new();
        for word in extract_keywords(text) {
            if !seen.insert(word.clone()) {
                continue;
            }
            let count = doc_freq.entry(word.clone()).or_insert(0);
            if *count == 0 {
                order.push(word);
            }
            *count += 1;
        }
    }

    if order.is_empty() {
        return leading_tokens(first, max_words);
    }

    let mut scored: Vec<(String, f64)> = order
        .into_iter()
        .map(|word| {
            let score = doc_freq[&word] as f64 * f64::from(cluster_importance(&word));
            (word, score)
        })
        .collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .take(max_words)
        .map(|(word, _)| word)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `max_words` normalized tokens, used when a cluster has no keywords.
fn leading_tokens(text: &str, max_words: usize) -> String {
    normalize(text)
        .split(' ')
        .filter(|t| !t.is_empty())
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Most frequent non-empty category. Ties go to the category seen first.
pub fn most_common_category<'a, I>(categories: I) -> Option<String>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut order: Vec<&str> = Vec::new();
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for category in categories.into_iter().flatten() {
        let category = category.trim();
        if category.is_empty() {
            continue;
        }
        let count = counts.entry(category).or_insert(0);
        if *count == 0 {
            order.push(category);
        }
        *count += 1;
    }

    let mut best: Option<(&str, usize)> = None;
    for category in order {
        let count = counts[category];
        if best.map_or(true, |(_, c)| count > c) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category.to_string())
}

/// Up to `limit` ids, in the order given.
pub fn sample_ids<'a, I>(ids: I, limit: usize) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    ids.into_iter().take(limit).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cluster_phrase_weighs_frequency_and_importance() {
        let texts = [
            "Kaca pecah di area packing",
            "Kaca retak saat packing",
        ];
        // kaca 2*9, packing 2*8, pecah 10, retak 10, area 1
        assert_eq!(cluster_key_phrase(&texts, 4), "kaca packing pecah retak");
    }

    #[test]
    fn cluster_phrase_counts_once_per_member() {
        let texts = ["laporan laporan laporan", "engsel"];
        // laporan 1*3, engsel 1*8
        assert_eq!(cluster_key_phrase(&texts, 2), "engsel laporan");
    }

    #[test]
    fn cluster_phrase_respects_word_budget() {
        let texts = ["kaca pecah retak bocor patah"];
        assert_eq!(cluster_key_phrase(&texts, 2).split(' ').count(), 2);
    }

    #[test]
    fn cluster_phrase_skips_empty_texts() {
        assert_eq!(cluster_key_phrase(&["", "  "], 4), "");
        assert_eq!(cluster_key_phrase(&["", "engsel longgar"], 4), "longgar engsel");
    }

    #[test]
    fn cluster_phrase_falls_back_to_first_text() {
        assert_eq!(cluster_key_phrase(&["di ke ok"], 4), "di ke ok");
    }

    #[test]
    fn cluster_phrase_fallback_respects_word_budget() {
        assert_eq!(cluster_key_phrase(&["", "di ke ok ya"], 2), "di ke");
    }

    #[test]
    fn category_majority_wins() {
        let cats = [Some("Produksi"), Some("QC"), Some("QC"), None];
        assert_eq!(most_common_category(cats), Some("QC".to_string()));
    }

    #[test]
    fn category_ties_go_to_first_seen() {
        let cats = [Some("QC"), Some("Produksi"), Some("Produksi"), Some("QC")];
        assert_eq!(most_common_category(cats), Some("QC".to_string()));
    }

    #[test]
    fn category_absent_is_none() {
        assert_eq!(most_common_category([None, Some(""), Some("  ")]), None);
    }

    #[test]
    fn sample_ids_are_capped() {
        let ids = ["a", "b", "c", "d", "e", "f"];
        assert_eq!(sample_ids(ids, 5), vec!["a", "b", "c", "d", "e"]);
        assert_eq!(sample_ids(["x"], 5), vec!["x"]);
    }
}
