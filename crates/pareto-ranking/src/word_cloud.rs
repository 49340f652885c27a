use std::collections::HashMap;

use pareto_core::models::WordFrequency;

use crate::text::extract_keywords;

/// Corpus-wide keyword tally for the word cloud.
///
/// Every occurrence counts. Words below `min_count` are dropped; the rest
/// are sorted by count descending with first-seen order on ties and cut to
/// `limit`.
pub fn count_word_frequencies<'a, I>(texts: I, limit: usize, min_count: usize) -> Vec<WordFrequency>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for text in texts {
        for word in extract_keywords(text) {
            match counts.get_mut(&word) {
                Some(count) => *count += 1,
                None => {
                    counts.insert(word.clone(), 1);
                    order.push(word);
                }
            }
        }
    }

    let mut freqs: Vec<WordFrequency> = order
        .into_iter()
        .filter_map(|word| {
            let count = counts[&word];
            (count >= min_count).then(|| WordFrequency::new(word, count))
        })
        .collect();
    freqs.sort_by(|a, b| b.count.cmp(&a.count));
    freqs.truncate(limit);
    freqs
}
