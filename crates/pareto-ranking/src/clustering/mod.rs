//! Greedy founder clustering over hybrid similarity.
//!
//! Items are scanned in input order. Each unassigned item founds a cluster
//! and pulls in every later unassigned item whose similarity *to the founder*
//! reaches the threshold. Membership is therefore order-dependent and not
//! transitive.

pub mod centroid;

use pareto_core::models::{ReportItem, SimilarityWeights};
use rayon::prelude::*;

use crate::similarity::lcs::lcs_similarity_chars;
use crate::similarity::{generate_trigrams, trigram_similarity, SimilaritySignals, TrigramSet};
use crate::text::{extract_keywords, normalize};
use crate::tfidf::{cosine_similarity, TfIdfModel, TfIdfVector};

pub use centroid::select_centroid;

/// Per-item features computed once per request.
#[derive(Debug, Clone)]
pub struct PreparedReport {
    pub normalized: Vec<char>,
    pub trigrams: TrigramSet,
    pub vector: TfIdfVector,
}

/// One cluster: indices into the prepared corpus, founder first.
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub members: Vec<usize>,
    /// Index into `members` of the most typical member.
    pub centroid: usize,
}

impl Cluster {
    pub fn founder(&self) -> usize {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Corpus index of the centroid member.
    pub fn centroid_index(&self) -> usize {
        self.members[self.centroid]
    }
}

/// Keyword lists for every item, in input order.
pub fn corpus_keywords(items: &[ReportItem]) -> Vec<Vec<String>> {
    items.par_iter().map(|item| extract_keywords(&item.text)).collect()
}

/// Build per-item features against a fitted model. Output order matches input.
pub fn prepare(items: &[ReportItem], keywords: &[Vec<String>], model: &TfIdfModel) -> Vec<PreparedReport> {
    items
        .par_iter()
        .zip(keywords.par_iter())
        .map(|(item, words)| PreparedReport {
            normalized: normalize(&item.text).chars().collect(),
            trigrams: generate_trigrams(&item.text),
            vector: model.transform(words),
        })
        .collect()
}

/// The three raw signals for a pair of prepared items.
pub fn pair_signals(a: &PreparedReport, b: &PreparedReport) -> SimilaritySignals {
    SimilaritySignals {
        trigram: trigram_similarity(&a.trigrams, &b.trigrams),
        lcs: lcs_similarity_chars(&a.normalized, &b.normalized),
        tfidf: cosine_similarity(&a.vector, &b.vector),
    }
}

/// Partition `reports` into clusters ordered by founder index.
///
/// Comparisons against one founder run in parallel; the candidate set is
/// fixed before the scan and results are collected in index order, so the
/// partition is identical to a sequential scan.
pub fn cluster_reports(
    reports: &[PreparedReport],
    weights: &SimilarityWeights,
    threshold: f64,
) -> Vec<Vec<usize>> {
    let mut assigned = vec![false; reports.len()];
    let mut clusters = Vec::new();

    for i in 0..reports.len() {
        if assigned[i] {
            continue;
        }
        assigned[i] = true;

        let candidates: Vec<usize> = (i + 1..reports.len()).filter(|&j| !assigned[j]).collect();
        let joined: Vec<usize> = candidates
            .par_iter()
            .filter(|&&j| pair_signals(&reports[i], &reports[j]).combined(weights) >= threshold)
            .copied()
            .collect();

        let mut members = Vec::with_capacity(joined.len() + 1);
        members.push(i);
        for j in joined {
            assigned[j] = true;
            members.push(j);
        }
        clusters.push(members);
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prepared(texts: &[&str]) -> Vec<PreparedReport> {
        let items: Vec<ReportItem> = texts
            .iter()
            .enumerate()
            .map(|(i, t)| ReportItem::new(format!("r{i}"), *t))
            .collect();
        let keywords = corpus_keywords(&items);
        let model = TfIdfModel::fit(&keywords, 2);
        prepare(&items, &keywords, &model)
    }

    #[test]
    fn empty_corpus_has_no_clusters() {
        assert!(cluster_reports(&[], &SimilarityWeights::CLUSTERING, 0.15).is_empty());
    }

    #[test]
    fn identical_texts_share_a_cluster() {
        let reports = prepared(&["kaca pecah", "kaca pecah", "roller macet parah"]);
        let clusters = cluster_reports(&reports, &SimilarityWeights::CLUSTERING, 0.15);
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn threshold_zero_merges_everything_into_founder() {
        let reports = prepared(&["aaa", "zzz", "qqq"]);
        let clusters = cluster_reports(&reports, &SimilarityWeights::CLUSTERING, 0.0);
        assert_eq!(clusters, vec![vec![0, 1, 2]]);
    }

    #[test]
    fn threshold_above_one_yields_singletons() {
        let reports = prepared(&["kaca pecah", "kaca pecah"]);
        let clusters = cluster_reports(&reports, &SimilarityWeights::CLUSTERING, 1.01);
        assert_eq!(clusters, vec![vec![0], vec![1]]);
    }

    #[test]
    fn membership_is_against_founder_only() {
        // b is close to a; c is close to b but not to a.
        let reports = prepared(&["abcdefgh", "efghijkl", "ijklmnop"]);
        let w = SimilarityWeights::new(0.0, 1.0, 0.0);
        // lcs(a,b)=4/8, lcs(a,c)=0, lcs(b,c)=4/8
        let clusters = cluster_reports(&reports, &w, 0.5);
        assert_eq!(clusters, vec![vec![0, 1], vec![2]]);
    }

    #[test]
    fn empty_text_items_still_participate() {
        let reports = prepared(&["kaca pecah", "", "kaca pecah"]);
        let clusters = cluster_reports(&reports, &SimilarityWeights::CLUSTERING, 0.15);
        let total: usize = clusters.iter().map(Vec::len).sum();
        assert_eq!(total, 3);
        assert!(clusters.contains(&vec![1]));
    }
}
