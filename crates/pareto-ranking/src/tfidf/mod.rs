//! TF-IDF vector space over report keywords.
//!
//! Vocabulary is restricted to terms appearing in at least `min_df`
//! documents. Vectors are sparse and carry their L2 norm so cosine
//! similarity is a single sparse dot product.

pub mod cache;

use std::collections::{BTreeMap, HashMap, HashSet};

pub use cache::{corpus_fingerprint, TfIdfModelCache};

/// Fitted TF-IDF model: vocabulary indices and inverse document frequencies.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfModel {
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Vec<f64>,
    doc_count: usize,
}

/// Sparse TF-IDF vector for one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TfIdfVector {
    /// Vocabulary index → weight. Only in-vocabulary terms appear.
    pub weights: BTreeMap<usize, f64>,
    /// L2 norm of `weights`.
    pub norm: f64,
}

impl TfIdfModel {
    /// Fit a model over keyword lists, one list per document.
    ///
    /// Document frequency counts each term once per document. Terms reaching
    /// `min_df` are indexed in first-seen order; idf = ln(N / (1 + df)) + 1.
    pub fn fit(documents: &[Vec<String>], min_df: usize) -> Self {
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for keywords in documents {
            let mut seen: HashSet<&str> = HashSet::new();
            for word in keywords {
                if seen.insert(word.as_str()) {
                    let df = doc_freq.entry(word.as_str()).or_insert_with(|| {
                        first_seen.push(word.as_str());
                        0
                    });
                    *df += 1;
                }
            }
        }

        let n = documents.len() as f64;
        let mut vocabulary = HashMap::new();
        let mut terms = Vec::new();
        let mut idf = Vec::new();

        for word in first_seen {
            let df = doc_freq[word];
            if df >= min_df {
                vocabulary.insert(word.to_string(), terms.len());
                terms.push(word.to_string());
                idf.push((n / (1.0 + df as f64)).ln() + 1.0);
            }
        }

        Self {
            vocabulary,
            terms,
            idf,
            doc_count: documents.len(),
        }
    }

    /// Project a document's keywords into the fitted vector space.
    ///
    /// Term frequency is the in-document count over the total keyword count,
    /// out-of-vocabulary keywords included.
    pub fn transform(&self, keywords: &[String]) -> TfIdfVector {
        if keywords.is_empty() {
            return TfIdfVector::default();
        }

        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for word in keywords {
            if let Some(&idx) = self.vocabulary.get(word) {
                *counts.entry(idx).or_insert(0) += 1;
            }
        }

        let total = keywords.len() as f64;
        let weights: BTreeMap<usize, f64> = counts
            .into_iter()
            .map(|(idx, count)| (idx, (count as f64 / total) * self.idf[idx]))
            .collect();
        let norm = weights.values().map(|w| w * w).sum::<f64>().sqrt();

        TfIdfVector { weights, norm }
    }

    /// The `n` highest-IDF vocabulary terms. Ties keep vocabulary order.
    pub fn top_terms(&self, n: usize) -> Vec<String> {
        let mut order: Vec<usize> = (0..self.terms.len()).collect();
        order.sort_by(|&a, &b| self.idf[b].total_cmp(&self.idf[a]));
        order
            .into_iter()
            .take(n)
            .map(|idx| self.terms[idx].clone())
            .collect()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf[idx])
    }
}

/// Cosine similarity of two sparse vectors, clamped to [0.0, 1.0].
///
/// Returns 0.0 when either vector has zero norm.
pub fn cosine_similarity(a: &TfIdfVector, b: &TfIdfVector) -> f64 {
    if a.norm == 0.0 || b.norm == 0.0 {
        return 0.0;
    }

    let dot: f64 = a
        .weights
        .iter()
        .filter_map(|(idx, wa)| b.weights.get(idx).map(|wb| wa * wb))
        .sum();

    (dot / (a.norm * b.norm)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter()
            .map(|d| d.iter().map(|w| w.to_string()).collect())
            .collect()
    }

    #[test]
    fn vocabulary_respects_min_df_and_first_seen_order() {
        let corpus = docs(&[&["kaca", "pecah"], &["pecah", "kaca"], &["rel", "pecah"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        assert_eq!(model.vocabulary_size(), 2);
        assert_eq!(model.index_of("kaca"), Some(0));
        assert_eq!(model.index_of("pecah"), Some(1));
        assert_eq!(model.index_of("rel"), None);
    }

    #[test]
    fn document_frequency_counts_once_per_document() {
        let corpus = docs(&[&["las", "las", "las"], &["bor"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        assert_eq!(model.vocabulary_size(), 0);
    }

    #[test]
    fn idf_formula() {
        let corpus = docs(&[&["kaca"], &["kaca"], &["rel"], &["bor"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        let expected = (4.0f64 / 3.0).ln() + 1.0;
        assert!((model.idf("kaca").unwrap() - expected).abs() < 1e-12);
    }

    #[test]
    fn transform_uses_total_keyword_count_for_tf() {
        let corpus = docs(&[&["kaca", "pecah"], &["kaca", "pecah"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        let words: Vec<String> = ["kaca", "kaca", "asing", "lain"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let v = model.transform(&words);
        let idf = model.idf("kaca").unwrap();
        assert_eq!(v.weights.len(), 1);
        assert!((v.weights[&0] - 0.5 * idf).abs() < 1e-12);
        assert!((v.norm - 0.5 * idf).abs() < 1e-12);
    }

    #[test]
    fn out_of_vocabulary_document_has_zero_norm() {
        let corpus = docs(&[&["kaca"], &["kaca"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        let v = model.transform(&["rel".to_string()]);
        assert!(v.weights.is_empty());
        assert_eq!(v.norm, 0.0);
    }

    #[test]
    fn cosine_zero_norm_is_zero() {
        let zero = TfIdfVector::default();
        assert_eq!(cosine_similarity(&zero, &zero), 0.0);
    }

    #[test]
    fn cosine_of_identical_vectors_is_one() {
        let corpus = docs(&[&["kaca", "pecah"], &["kaca", "pecah"], &["rel"]]);
        let model = TfIdfModel::fit(&corpus, 2);
        let v = model.transform(&corpus[0]);
        assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn top_terms_prefers_rare_terms() {
        let corpus = docs(&[
            &["kaca", "rel"],
            &["kaca", "rel"],
            &["kaca"],
            &["kaca"],
        ]);
        let model = TfIdfModel::fit(&corpus, 2);
        assert_eq!(model.top_terms(10), vec!["rel".to_string(), "kaca".to_string()]);
        assert_eq!(model.top_terms(1), vec!["rel".to_string()]);
    }

    #[test]
    fn empty_corpus_fits_empty_model() {
        let model = TfIdfModel::fit(&[], 2);
        assert_eq!(model.vocabulary_size(), 0);
        assert_eq!(model.doc_count(), 0);
        assert!(model.top_terms(10).is_empty());
    }
}
