//! Risk Priority Number: frequency and recency blended into a 0–100 score.
//!
//! ```text
//! frequency = log10(members + 1) × 10
//! recency   = mean over dated members of 10 × e^(−days / window)   (5.0 if none dated)
//! rpn       = min((frequency × 0.6 + recency × 0.4) × 10, 100)
//! ```

use chrono::NaiveDate;
use pareto_core::config::RpnConfig;
use pareto_core::constants::{MAX_RECENCY_SCORE, MAX_RPN};
use serde::Serialize;

/// Per-factor RPN breakdown for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RpnBreakdown {
    pub frequency: f64,
    pub recency: f64,
    pub rpn: f64,
}

/// Scores clusters against a fixed reference date.
#[derive(Debug, Clone)]
pub struct RpnScorer {
    config: RpnConfig,
    today: NaiveDate,
}

impl RpnScorer {
    pub fn new(config: RpnConfig, today: NaiveDate) -> Self {
        Self { config, today }
    }

    /// Diminishing-returns frequency factor.
    pub fn frequency_score(&self, member_count: usize) -> f64 {
        ((member_count + 1) as f64).log10() * 10.0
    }

    /// Mean exponential recency over members with a known date.
    ///
    /// Future dates count as today. No dated member yields the neutral score.
    pub fn recency_score<I>(&self, dates: I) -> f64
    where
        I: IntoIterator<Item = Option<NaiveDate>>,
    {
        let window = f64::from(self.config.recency_window_days);
        let (total, dated) = dates
            .into_iter()
            .flatten()
            .fold((0.0, 0usize), |(total, dated), date| {
                let days = (self.today - date).num_days().max(0) as f64;
                (total + MAX_RECENCY_SCORE * (-days / window).exp(), dated + 1)
            });

        if dated == 0 {
            return self.config.neutral_recency;
        }
        total / dated as f64
    }

    /// Score a cluster from its size and member dates.
    pub fn score<I>(&self, member_count: usize, dates: I) -> RpnBreakdown
    where
        I: IntoIterator<Item = Option<NaiveDate>>,
    {
        if member_count == 0 {
            return RpnBreakdown {
                frequency: 0.0,
                recency: 0.0,
                rpn: 0.0,
            };
        }

        let frequency = self.frequency_score(member_count);
        let recency = self.recency_score(dates);
        let raw = frequency * self.config.frequency_weight + recency * self.config.recency_weight;

        RpnBreakdown {
            frequency,
            recency,
            rpn: (raw * 10.0).clamp(0.0, MAX_RPN),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }
}

/// Stable descending sort by RPN; equal scores keep their relative order.
pub fn sort_by_rpn<T, F>(items: &mut [T], rpn: F)
where
    F: Fn(&T) -> f64,
{
    items.sort_by(|a, b| rpn(b).total_cmp(&rpn(a)));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    fn scorer() -> RpnScorer {
        RpnScorer::new(RpnConfig::default(), today())
    }

    #[test]
    fn frequency_is_logarithmic() {
        let s = scorer();
        assert!((s.frequency_score(9) - 10.0).abs() < 1e-12);
        assert!((s.frequency_score(1) - 2.0f64.log10() * 10.0).abs() < 1e-12);
    }

    #[test]
    fn recency_today_is_max() {
        let s = scorer();
        assert!((s.recency_score([Some(today())]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn recency_one_year_old_is_near_zero() {
        let s = scorer();
        let old = today() - chrono::Duration::days(365);
        let r = s.recency_score([Some(old)]);
        assert!((r - 10.0 * (-365.0f64 / 90.0).exp()).abs() < 1e-12);
        assert!((r - 0.17).abs() < 0.01);
    }

    #[test]
    fn future_dates_count_as_today() {
        let s = scorer();
        let future = today() + chrono::Duration::days(30);
        assert!((s.recency_score([Some(future)]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn undated_members_are_skipped() {
        let s = scorer();
        assert!((s.recency_score([Some(today()), None, None]) - 10.0).abs() < 1e-12);
    }

    #[test]
    fn no_dates_is_neutral() {
        let s = scorer();
        assert_eq!(s.recency_score([None, None]), 5.0);
        assert_eq!(s.recency_score(std::iter::empty()), 5.0);
    }

    #[test]
    fn singleton_without_dates() {
        // (log10(2)*10*0.6 + 5*0.4) * 10
        let b = scorer().score(1, [None]);
        let expected = (2.0f64.log10() * 10.0 * 0.6 + 2.0) * 10.0;
        assert!((b.rpn - expected).abs() < 1e-9);
        assert_eq!(b.recency, 5.0);
    }

    #[test]
    fn rpn_is_capped_at_100() {
        let dates = vec![Some(today()); 999];
        let b = scorer().score(999, dates);
        assert_eq!(b.rpn, 100.0);
        assert!(b.frequency > 29.0);
    }

    #[test]
    fn empty_cluster_scores_zero() {
        assert_eq!(scorer().score(0, std::iter::empty()).rpn, 0.0);
    }

    #[test]
    fn sort_is_stable_descending() {
        let mut items = vec![("a", 10.0), ("b", 30.0), ("c", 10.0), ("d", 30.0)];
        sort_by_rpn(&mut items, |i| i.1);
        let order: Vec<&str> = items.iter().map(|i| i.0).collect();
        assert_eq!(order, vec!["b", "d", "a", "c"]);
    }
}
