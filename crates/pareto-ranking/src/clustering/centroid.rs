use pareto_core::models::SimilarityWeights;

use super::{pair_signals, PreparedReport};

/// Position within `members` of the member with the lowest mean distance
/// (1 − similarity) to every other member. First minimum wins.
pub fn select_centroid(
    members: &[usize],
    reports: &[PreparedReport],
    weights: &SimilarityWeights,
) -> usize {
    if members.len() <= 1 {
        return 0;
    }

    let mut best = 0;
    let mut best_distance = f64::INFINITY;

    for (pos, &i) in members.iter().enumerate() {
        let total: f64 = members
            .iter()
            .filter(|&&j| j != i)
            .map(|&j| 1.0 - pair_signals(&reports[i], &reports[j]).combined(weights))
            .sum();
        let avg = total / (members.len() - 1) as f64;
        if avg < best_distance {
            best_distance = avg;
            best = pos;
        }
    }

    best
}
